//! Element names recognized inside a product catalog

/// Closed set of tags the product parser dispatches on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProductTag {
    /// `productInfo` - one product record
    ProductInfo,
    /// `indexNum` - sequence index
    IndexNum,
    /// `name` - full product name
    Name,
    /// `trademarkInfo` - trademark block
    TrademarkInfo,
    /// `trademark` - trademark text inside the trademark block
    Trademark,
    /// `OKEIInfo` - unit-of-measure block
    OkeiInfo,
    /// `nationalCode` - unit national code inside the OKEI block
    NationalCode,
    /// `OKPD2Info` - classification block
    Okpd2Info,
    /// `OKPDCode` - classification code inside the OKPD2 block
    OkpdCode,
    /// `medicalProductCode`
    MedicalProductCode,
    /// `countryFullName`
    CountryFullName,
    /// `manufacturer`
    Manufacturer,
    /// Any element not listed above
    Other,
}

impl ProductTag {
    /// Classify an element by its local name
    pub fn from_name(name: &str) -> Self {
        match name {
            "productInfo" => ProductTag::ProductInfo,
            "indexNum" => ProductTag::IndexNum,
            "name" => ProductTag::Name,
            "trademarkInfo" => ProductTag::TrademarkInfo,
            "trademark" => ProductTag::Trademark,
            "OKEIInfo" => ProductTag::OkeiInfo,
            "nationalCode" => ProductTag::NationalCode,
            "OKPD2Info" => ProductTag::Okpd2Info,
            "OKPDCode" => ProductTag::OkpdCode,
            "medicalProductCode" => ProductTag::MedicalProductCode,
            "countryFullName" => ProductTag::CountryFullName,
            "manufacturer" => ProductTag::Manufacturer,
            _ => ProductTag::Other,
        }
    }

    /// The element name as it appears in documents
    pub fn as_str(&self) -> &'static str {
        match self {
            ProductTag::ProductInfo => "productInfo",
            ProductTag::IndexNum => "indexNum",
            ProductTag::Name => "name",
            ProductTag::TrademarkInfo => "trademarkInfo",
            ProductTag::Trademark => "trademark",
            ProductTag::OkeiInfo => "OKEIInfo",
            ProductTag::NationalCode => "nationalCode",
            ProductTag::Okpd2Info => "OKPD2Info",
            ProductTag::OkpdCode => "OKPDCode",
            ProductTag::MedicalProductCode => "medicalProductCode",
            ProductTag::CountryFullName => "countryFullName",
            ProductTag::Manufacturer => "manufacturer",
            ProductTag::Other => "",
        }
    }
}
