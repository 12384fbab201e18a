use super::types::Party;

/// Builder for [`Party`].
///
/// ```
/// use sepa_pain::core::*;
///
/// let creditor = PartyBuilder::new("ACME GmbH", "DE87123456781234567890")
///     .bank_code("COBADEFFXXX")
///     .address("Friedrichstraße 123", "10115 Berlin", "DE")
///     .build();
/// assert!(creditor.postal_address().is_some());
/// ```
pub struct PartyBuilder {
    name: String,
    account: String,
    street: Option<String>,
    city: Option<String>,
    country: Option<String>,
    bank_code: Option<String>,
}

impl PartyBuilder {
    pub fn new(name: impl Into<String>, account: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            account: account.into(),
            street: None,
            city: None,
            country: None,
            bank_code: None,
        }
    }

    pub fn bank_code(mut self, bic: impl Into<String>) -> Self {
        self.bank_code = Some(bic.into());
        self
    }

    /// Street line, city line and ISO country code.
    pub fn address(
        mut self,
        street: impl Into<String>,
        city: impl Into<String>,
        country: impl Into<String>,
    ) -> Self {
        self.street = Some(street.into());
        self.city = Some(city.into());
        self.country = Some(country.into());
        self
    }

    pub fn street(mut self, street: impl Into<String>) -> Self {
        self.street = Some(street.into());
        self
    }

    pub fn city(mut self, city: impl Into<String>) -> Self {
        self.city = Some(city.into());
        self
    }

    pub fn country(mut self, country: impl Into<String>) -> Self {
        self.country = Some(country.into());
        self
    }

    pub fn build(self) -> Party {
        Party {
            name: self.name,
            street: self.street,
            city: self.city,
            country: self.country,
            account: self.account,
            bank_code: self.bank_code,
        }
    }
}
