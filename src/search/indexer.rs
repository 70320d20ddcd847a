//! Walks the normalized content tree and emits the flat chunk
//! collection the query engine scores against.

use crate::content::{ContentTree, ItServiceSection, ServiceSection, SiteConfig};
use crate::models::{ContentChunk, Service};

use super::keywords::{domain_keywords, extract_keywords};

/// Indexes website content into searchable chunks.
///
/// Missing optional fields index as empty; a valid subset of content is
/// always better than failing the whole build.
pub struct ContentIndexer {
    chunks: Vec<ContentChunk>,
}

impl ContentIndexer {
    /// Index all content in the tree. Chunk ids are deterministic for a
    /// given tree, so rebuilding from unchanged content reproduces the
    /// same collection.
    pub fn index_all(tree: &ContentTree) -> Vec<ContentChunk> {
        let mut indexer = ContentIndexer { chunks: Vec::new() };
        indexer.index_medical(&tree.services.medical);
        indexer.index_it(&tree.services.it, &tree.it_service.it_service);
        indexer.index_education(&tree.services.education);
        indexer.index_sports(&tree.services.sports);
        indexer.index_banquets(&tree.services.banquets);
        indexer.index_graveyard(&tree.services.graveyard);
        indexer.index_organization(&tree.site_config);
        indexer.chunks
    }

    fn push_chunk(
        &mut self,
        service: Service,
        category: &str,
        title: &str,
        content: &str,
        source: &str,
    ) {
        let id = format!("{service}_{category}_{}", self.chunks.len());
        let mut keywords = extract_keywords(&format!("{title} {content}"));
        keywords.extend(domain_keywords(service).iter().map(|k| k.to_string()));
        self.chunks.push(ContentChunk {
            id,
            service,
            category: category.to_string(),
            title: title.to_string(),
            content: content.to_string(),
            keywords,
            source: source.to_string(),
        });
    }

    /// Overview chunk from the section description, titled from the
    /// banner when present.
    fn index_overview(
        &mut self,
        service: Service,
        section: &ServiceSection,
        fallback_title: &str,
        source: &str,
    ) {
        if let Some(description) = &section.description {
            let title = section
                .banner
                .title
                .clone()
                .unwrap_or_else(|| fallback_title.to_string());
            self.push_chunk(service, "overview", &title, description, source);
        }
    }

    fn index_medical(&mut self, section: &ServiceSection) {
        self.index_overview(Service::Medical, section, "Medical Services", "services/medical");
        for svc in &section.services {
            self.push_chunk(
                Service::Medical,
                "service",
                &svc.title,
                &svc.description,
                "services/medical",
            );
        }
    }

    fn index_it(&mut self, section: &ServiceSection, extra: &ItServiceSection) {
        self.index_overview(Service::It, section, "IT Services", "services/it");
        for course in &section.courses {
            let content = format!(
                "{} Duration: {}. Level: {}.",
                course.description, course.duration, course.level
            );
            self.push_chunk(Service::It, "course", &course.title, &content, "services/it");
        }
        if let Some(camp) = &section.summer_camp {
            self.push_chunk(Service::It, "program", "Summer Camp", camp, "services/it");
        }

        // it-service.json supplies a second overview plus its own course list.
        if let Some(description) = &extra.description {
            self.push_chunk(
                Service::It,
                "overview",
                "IT Services Overview",
                description,
                "services/it",
            );
        }
        if let Some(image_section) = &extra.image_section {
            self.push_chunk(
                Service::It,
                "mission",
                &image_section.title,
                &image_section.description,
                "services/it",
            );
        }
        for course in &extra.courses {
            self.push_chunk(
                Service::It,
                "course",
                &course.title,
                &course.description,
                "services/it",
            );
        }
    }

    fn index_education(&mut self, section: &ServiceSection) {
        self.index_overview(
            Service::Education,
            section,
            "Education Services",
            "services/education",
        );
        for program in &section.programs {
            self.push_chunk(
                Service::Education,
                "program",
                &program.title,
                &program.description,
                "services/education",
            );
        }
    }

    fn index_sports(&mut self, section: &ServiceSection) {
        self.index_overview(Service::Sports, section, "Sports Facilities", "services/sports");
        for facility in &section.facilities {
            self.push_chunk(
                Service::Sports,
                "facility",
                &facility.title,
                &facility.description,
                "services/sports",
            );
        }
    }

    fn index_banquets(&mut self, section: &ServiceSection) {
        self.index_overview(
            Service::Banquets,
            section,
            "Banquet Services",
            "services/banquets",
        );
        for hall in &section.halls {
            let capacity = hall
                .capacity
                .map(|c| c.to_string())
                .unwrap_or_else(|| "N/A".to_string());
            let content = format!("{} Capacity: {capacity} guests.", hall.description);
            self.push_chunk(
                Service::Banquets,
                "hall",
                &hall.title,
                &content,
                "services/banquets",
            );
        }
    }

    fn index_graveyard(&mut self, section: &ServiceSection) {
        self.index_overview(
            Service::Graveyard,
            section,
            "Graveyard Services",
            "services/graveyard",
        );
        for svc in &section.services {
            self.push_chunk(
                Service::Graveyard,
                "service",
                &svc.title,
                &svc.description,
                "services/graveyard",
            );
        }
        if let Some(contact) = &section.contact {
            self.push_chunk(
                Service::Graveyard,
                "contact",
                "Graveyard Contact",
                contact,
                "services/graveyard",
            );
        }
    }

    fn index_organization(&mut self, site: &SiteConfig) {
        let name = site.site_name.en.as_deref();
        let description = site.site_description.en.as_deref();
        if name.is_some() || description.is_some() {
            self.push_chunk(
                Service::Organization,
                "info",
                name.unwrap_or("Unity Welfare Organization"),
                description.unwrap_or(""),
                "site-config",
            );
        }

        let contact = &site.contact;
        if contact.email.is_some() || contact.phone.is_some() || contact.address.en.is_some() {
            let content = format!(
                "Email: {}. Phone: {}. Address: {}.",
                contact.email.as_deref().unwrap_or(""),
                contact.phone.as_deref().unwrap_or(""),
                contact.address.en.as_deref().unwrap_or("")
            );
            self.push_chunk(
                Service::Organization,
                "contact",
                "Contact Information",
                &content,
                "site-config",
            );
        }
    }
}
