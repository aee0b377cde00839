//! Allowed query filters per resource.
//!
//! Every field is optional; only the fields that are set end up in the
//! query string.

use crate::params::{format_params, ParamValue};

/// A set of named, optional query filters.
pub trait Filters {
    /// Filter names paired with their values, in query order.
    fn params(&self) -> Vec<(&'static str, Option<ParamValue>)>;

    /// The formatted query parameters to send upstream.
    fn to_query(&self) -> Vec<(&'static str, String)> {
        format_params(self.params())
    }
}

fn opt<T>(value: &Option<T>) -> Option<ParamValue>
where
    T: Clone + Into<ParamValue>,
{
    value.clone().map(Into::into)
}

/// Filters for `GET producten`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductFilters {
    pub uuid_in: Option<Vec<String>>,
    pub gepubliceerd: Option<bool>,
    pub status: Option<String>,
    pub frequentie: Option<String>,
    pub producttype_uuid_in: Option<Vec<String>>,
    pub producttype_code: Option<String>,
    pub producttype_naam: Option<String>,
    pub naam: Option<String>,
    pub naam_contains: Option<String>,
    pub eigenaren_bsn: Option<String>,
    pub eigenaren_kvk_nummer: Option<String>,
    pub prijs_gte: Option<f64>,
    pub prijs_lte: Option<f64>,
    pub start_datum_gte: Option<String>,
    pub start_datum_lte: Option<String>,
    pub eind_datum_gte: Option<String>,
    pub eind_datum_lte: Option<String>,
    pub aanmaak_datum_gte: Option<String>,
    pub aanmaak_datum_lte: Option<String>,
    pub update_datum_gte: Option<String>,
    pub update_datum_lte: Option<String>,
    pub page: Option<u32>,
    pub page_size: Option<u32>,
}

impl Filters for ProductFilters {
    fn params(&self) -> Vec<(&'static str, Option<ParamValue>)> {
        vec![
            ("uuid__in", opt(&self.uuid_in)),
            ("gepubliceerd", opt(&self.gepubliceerd)),
            ("status", opt(&self.status)),
            ("frequentie", opt(&self.frequentie)),
            ("producttype__uuid__in", opt(&self.producttype_uuid_in)),
            ("producttype__code", opt(&self.producttype_code)),
            ("producttype__naam", opt(&self.producttype_naam)),
            ("naam", opt(&self.naam)),
            ("naam__contains", opt(&self.naam_contains)),
            ("eigenaren__bsn", opt(&self.eigenaren_bsn)),
            ("eigenaren__kvk_nummer", opt(&self.eigenaren_kvk_nummer)),
            ("prijs__gte", opt(&self.prijs_gte)),
            ("prijs__lte", opt(&self.prijs_lte)),
            ("start_datum__gte", opt(&self.start_datum_gte)),
            ("start_datum__lte", opt(&self.start_datum_lte)),
            ("eind_datum__gte", opt(&self.eind_datum_gte)),
            ("eind_datum__lte", opt(&self.eind_datum_lte)),
            ("aanmaak_datum__gte", opt(&self.aanmaak_datum_gte)),
            ("aanmaak_datum__lte", opt(&self.aanmaak_datum_lte)),
            ("update_datum__gte", opt(&self.update_datum_gte)),
            ("update_datum__lte", opt(&self.update_datum_lte)),
            ("page", opt(&self.page)),
            ("page_size", opt(&self.page_size)),
        ]
    }
}

/// Filters for `GET producttypen`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductTypeFilters {
    pub uuid_in: Option<Vec<String>>,
    pub code: Option<String>,
    pub naam: Option<String>,
    pub naam_contains: Option<String>,
    pub keywords: Option<Vec<String>>,
    pub gepubliceerd: Option<bool>,
    pub themas_uuid_in: Option<Vec<String>>,
    pub themas_naam: Option<String>,
    pub uniforme_product_naam_naam: Option<String>,
    pub aanmaak_datum_gte: Option<String>,
    pub aanmaak_datum_lte: Option<String>,
    pub update_datum_gte: Option<String>,
    pub update_datum_lte: Option<String>,
    pub page: Option<u32>,
    pub page_size: Option<u32>,
}

impl Filters for ProductTypeFilters {
    fn params(&self) -> Vec<(&'static str, Option<ParamValue>)> {
        vec![
            ("uuid__in", opt(&self.uuid_in)),
            ("code", opt(&self.code)),
            ("naam", opt(&self.naam)),
            ("naam__contains", opt(&self.naam_contains)),
            ("keywords", opt(&self.keywords)),
            ("gepubliceerd", opt(&self.gepubliceerd)),
            ("themas__uuid__in", opt(&self.themas_uuid_in)),
            ("themas__naam", opt(&self.themas_naam)),
            (
                "uniforme_product_naam__naam",
                opt(&self.uniforme_product_naam_naam),
            ),
            ("aanmaak_datum__gte", opt(&self.aanmaak_datum_gte)),
            ("aanmaak_datum__lte", opt(&self.aanmaak_datum_lte)),
            ("update_datum__gte", opt(&self.update_datum_gte)),
            ("update_datum__lte", opt(&self.update_datum_lte)),
            ("page", opt(&self.page)),
            ("page_size", opt(&self.page_size)),
        ]
    }
}

/// Filters for `GET themas`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ThemeFilters {
    pub uuid_in: Option<Vec<String>>,
    pub naam: Option<String>,
    pub naam_contains: Option<String>,
    pub gepubliceerd: Option<bool>,
    pub hoofd_thema_uuid: Option<String>,
    pub hoofd_thema_naam: Option<String>,
    pub aanmaak_datum_gte: Option<String>,
    pub aanmaak_datum_lte: Option<String>,
    pub update_datum_gte: Option<String>,
    pub update_datum_lte: Option<String>,
    pub page: Option<u32>,
    pub page_size: Option<u32>,
}

impl Filters for ThemeFilters {
    fn params(&self) -> Vec<(&'static str, Option<ParamValue>)> {
        vec![
            ("uuid__in", opt(&self.uuid_in)),
            ("naam", opt(&self.naam)),
            ("naam__contains", opt(&self.naam_contains)),
            ("gepubliceerd", opt(&self.gepubliceerd)),
            ("hoofd_thema__uuid", opt(&self.hoofd_thema_uuid)),
            ("hoofd_thema__naam", opt(&self.hoofd_thema_naam)),
            ("aanmaak_datum__gte", opt(&self.aanmaak_datum_gte)),
            ("aanmaak_datum__lte", opt(&self.aanmaak_datum_lte)),
            ("update_datum__gte", opt(&self.update_datum_gte)),
            ("update_datum__lte", opt(&self.update_datum_lte)),
            ("page", opt(&self.page)),
            ("page_size", opt(&self.page_size)),
        ]
    }
}

/// Filters for `GET organisaties`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OrganizationFilters {
    pub uuid_in: Option<Vec<String>>,
    pub naam: Option<String>,
    pub naam_contains: Option<String>,
    pub code: Option<String>,
    pub email: Option<String>,
    pub telefoonnummer: Option<String>,
    pub straat: Option<String>,
    pub huisnummer: Option<String>,
    pub postcode: Option<String>,
    pub stad: Option<String>,
    pub page: Option<u32>,
    pub page_size: Option<u32>,
}

impl Filters for OrganizationFilters {
    fn params(&self) -> Vec<(&'static str, Option<ParamValue>)> {
        vec![
            ("uuid__in", opt(&self.uuid_in)),
            ("naam", opt(&self.naam)),
            ("naam__contains", opt(&self.naam_contains)),
            ("code", opt(&self.code)),
            ("email", opt(&self.email)),
            ("telefoonnummer", opt(&self.telefoonnummer)),
            ("straat", opt(&self.straat)),
            ("huisnummer", opt(&self.huisnummer)),
            ("postcode", opt(&self.postcode)),
            ("stad", opt(&self.stad)),
            ("page", opt(&self.page)),
            ("page_size", opt(&self.page_size)),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_filters_are_empty() {
        assert!(ProductFilters::default().to_query().is_empty());
        assert!(ProductTypeFilters::default().to_query().is_empty());
        assert!(ThemeFilters::default().to_query().is_empty());
        assert!(OrganizationFilters::default().to_query().is_empty());
    }

    #[test]
    fn test_product_type_keywords_and_page() {
        let filters = ProductTypeFilters {
            keywords: Some(vec!["a".into(), "b".into()]),
            page: Some(2),
            ..Default::default()
        };
        assert_eq!(
            filters.to_query(),
            vec![("keywords", "a, b".to_string()), ("page", "2".to_string())]
        );
    }

    #[test]
    fn test_product_date_range_and_uuid_list() {
        let filters = ProductFilters {
            uuid_in: Some(vec![
                "5f6a2219-5768-4e11-8a8e-ffbafff32482".into(),
                "e1a4b1a3-3c2c-4d2b-9a51-8a5c8c1ac2e0".into(),
            ]),
            start_datum_gte: Some("2024-01-01".into()),
            start_datum_lte: Some("2024-12-31".into()),
            gepubliceerd: Some(false),
            ..Default::default()
        };
        assert_eq!(
            filters.to_query(),
            vec![
                (
                    "uuid__in",
                    "5f6a2219-5768-4e11-8a8e-ffbafff32482, e1a4b1a3-3c2c-4d2b-9a51-8a5c8c1ac2e0"
                        .to_string()
                ),
                ("gepubliceerd", "false".to_string()),
                ("start_datum__gte", "2024-01-01".to_string()),
                ("start_datum__lte", "2024-12-31".to_string()),
            ]
        );
    }

    #[test]
    fn test_organization_text_filters() {
        let filters = OrganizationFilters {
            naam_contains: Some("gemeente".into()),
            stad: Some("Utrecht".into()),
            page_size: Some(10),
            ..Default::default()
        };
        assert_eq!(
            filters.to_query(),
            vec![
                ("naam__contains", "gemeente".to_string()),
                ("stad", "Utrecht".to_string()),
                ("page_size", "10".to_string()),
            ]
        );
    }

    #[test]
    fn test_theme_params_cover_every_field() {
        let filters = ThemeFilters::default();
        let names: Vec<_> = filters.params().into_iter().map(|(k, _)| k).collect();
        assert_eq!(names.len(), 12);
        assert!(names.contains(&"hoofd_thema__uuid"));
    }
}
