//! Static website content: schema types and the JSON loader.
//!
//! The source JSON shapes vary per service, so every field is optional
//! and defaults to empty. The loader normalizes whatever is present
//! into one [`ContentTree`]; indexing a valid subset of content always
//! beats failing on a missing field.

pub mod loader;

use serde::Deserialize;

/// The fully loaded content tree the indexer walks.
#[derive(Debug, Clone, Default)]
pub struct ContentTree {
    pub services: ServicesFile,
    pub it_service: ItServiceFile,
    pub site_config: SiteConfig,
}

/// `services.json`: one section per service.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ServicesFile {
    pub medical: ServiceSection,
    pub it: ServiceSection,
    pub education: ServiceSection,
    pub sports: ServiceSection,
    pub banquets: ServiceSection,
    pub graveyard: ServiceSection,
}

/// One service's content section. Which item lists are populated
/// depends on the service (medical/graveyard use `services`, it uses
/// `courses`, education `programs`, sports `facilities`, banquets
/// `halls`).
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ServiceSection {
    pub banner: Banner,
    pub description: Option<String>,
    pub timings: Option<String>,
    pub services: Vec<OfferingItem>,
    pub courses: Vec<CourseItem>,
    pub programs: Vec<OfferingItem>,
    pub facilities: Vec<OfferingItem>,
    pub halls: Vec<HallItem>,
    pub summer_camp: Option<String>,
    pub contact: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Banner {
    pub title: Option<String>,
    pub subtitle: Option<String>,
}

/// A named offering: a medical service, an education program, a sports
/// facility.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct OfferingItem {
    pub title: String,
    pub description: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct CourseItem {
    pub title: String,
    pub description: String,
    pub duration: String,
    pub level: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct HallItem {
    pub title: String,
    pub description: String,
    pub capacity: Option<u32>,
}

/// `it-service.json`: extra IT content beyond the services file.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ItServiceFile {
    pub it_service: ItServiceSection,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ItServiceSection {
    pub description: Option<String>,
    pub image_section: Option<ImageSection>,
    pub courses: Vec<OfferingItem>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ImageSection {
    pub title: String,
    pub description: String,
}

/// `site-config.json`: organization-wide metadata.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SiteConfig {
    pub site_name: Localized,
    pub site_description: Localized,
    pub contact: SiteContact,
}

/// A per-language string; only English content is indexed.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Localized {
    pub en: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct SiteContact {
    pub email: Option<String>,
    pub phone: Option<String>,
    pub address: Localized,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_service_section_all_fields_optional() {
        let section: ServiceSection = serde_json::from_str("{}").unwrap();
        assert!(section.description.is_none());
        assert!(section.services.is_empty());
        assert!(section.halls.is_empty());
        assert!(section.banner.title.is_none());
    }

    #[test]
    fn test_service_section_camel_case_fields() {
        let section: ServiceSection = serde_json::from_str(
            r#"{"summerCamp": "Coding camp for kids", "banner": {"title": "IT"}}"#,
        )
        .unwrap();
        assert_eq!(section.summer_camp.as_deref(), Some("Coding camp for kids"));
        assert_eq!(section.banner.title.as_deref(), Some("IT"));
    }

    #[test]
    fn test_hall_capacity_optional() {
        let hall: HallItem =
            serde_json::from_str(r#"{"title": "Main Hall", "description": "Large"}"#).unwrap();
        assert_eq!(hall.capacity, None);

        let hall: HallItem = serde_json::from_str(r#"{"title": "A", "capacity": 500}"#).unwrap();
        assert_eq!(hall.capacity, Some(500));
    }

    #[test]
    fn test_it_service_file_nested_shape() {
        let file: ItServiceFile = serde_json::from_str(
            r#"{"itService": {"description": "Tech for all", "imageSection": {"title": "Mission", "description": "Bridge the gap"}}}"#,
        )
        .unwrap();
        assert_eq!(file.it_service.description.as_deref(), Some("Tech for all"));
        assert_eq!(
            file.it_service.image_section.as_ref().unwrap().title,
            "Mission"
        );
    }

    #[test]
    fn test_site_config_localized_fields() {
        let config: SiteConfig = serde_json::from_str(
            r#"{"siteName": {"en": "Unity Welfare Organization"}, "contact": {"email": "info@example.org", "address": {"en": "12 Canal Road"}}}"#,
        )
        .unwrap();
        assert_eq!(
            config.site_name.en.as_deref(),
            Some("Unity Welfare Organization")
        );
        assert!(config.site_description.en.is_none());
        assert_eq!(config.contact.address.en.as_deref(), Some("12 Canal Road"));
    }
}
