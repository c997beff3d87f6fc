use rust_embed::Embed;
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use serde_json::Value;

#[derive(Embed)]
#[folder = "data"]
pub struct Assets;

const DEFAULT_DOCUMENT: &str = "portfolio.json";

/// The full content model rendered by the site.
///
/// The document is deliberately opaque: the store round-trips it as raw JSON
/// and never validates its shape. Rendering components pull typed views out
/// of it with [`PortfolioDocument::section`], which tolerates missing or
/// mismatched fields by falling back to defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PortfolioDocument(pub Value);

impl PortfolioDocument {
    pub fn from_slice(raw: &[u8]) -> Result<Self, serde_json::Error> {
        serde_json::from_slice::<Value>(raw).map(Self)
    }

    pub fn from_str(raw: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str::<Value>(raw).map(Self)
    }

    /// Pretty-printed (2-space indented) JSON, as offered for download.
    pub fn to_pretty(&self) -> String {
        serde_json::to_string_pretty(&self.0)
            .expect("a JSON value should always serialize")
    }

    pub fn to_compact(&self) -> String {
        serde_json::to_string(&self.0).expect("a JSON value should always serialize")
    }

    /// Extracts a typed view of one top-level section. A missing section or
    /// a shape mismatch yields `T::default()` rather than an error; shape is
    /// a rendering concern, not a storage one.
    pub fn section<T>(&self, name: &str) -> T
    where
        T: DeserializeOwned + Default,
    {
        self.0
            .get(name)
            .cloned()
            .and_then(|v| serde_json::from_value(v).ok())
            .unwrap_or_default()
    }
}

/// The bundled default document, used on first run and as the fallback when
/// the stored record is unreadable.
pub fn default_document() -> PortfolioDocument {
    let asset =
        Assets::get(DEFAULT_DOCUMENT).expect("bundled portfolio.json should be embedded");
    PortfolioDocument::from_slice(&asset.data)
        .expect("bundled portfolio.json should be valid JSON")
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct HomeContent {
    pub name: String,
    pub tagline: String,
    pub profile_image: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Kpi {
    pub value: String,
    pub label: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AboutContent {
    pub full_name: String,
    pub one_liner: String,
    pub description: String,
    pub email: String,
    pub phone: String,
    pub location: String,
    pub kpis: Vec<Kpi>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Experience {
    pub id: String,
    pub company: String,
    pub role: String,
    pub period: String,
    pub responsibilities: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Skill {
    pub name: String,
    pub level: u8,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SkillCategory {
    pub category: String,
    pub items: Vec<Skill>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ProjectLink {
    #[serde(rename = "type")]
    pub kind: String,
    pub url: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Project {
    pub id: String,
    pub title: String,
    pub image: String,
    pub tech_stack: Vec<String>,
    pub tags: Vec<String>,
    pub description: String,
    pub contribution: String,
    pub results: String,
    pub links: Vec<ProjectLink>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AwardItem {
    pub id: String,
    pub title: String,
    pub category: String,
    pub period: String,
    pub institution: String,
    pub description: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ContactContent {
    pub email: String,
    pub phone: String,
    pub location: String,
    pub kakao_talk: String,
    pub github: String,
    pub linkedin: String,
    pub website: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_document_has_all_sections() {
        let doc = default_document();
        for name in [
            "home",
            "about",
            "experience",
            "skills",
            "projects",
            "awards",
            "contact",
        ] {
            assert!(
                doc.0.get(name).is_some(),
                "bundled document is missing the {name} section"
            );
        }
    }

    #[test]
    fn test_typed_views_from_default_document() {
        let doc = default_document();

        let home: HomeContent = doc.section("home");
        assert!(!home.name.is_empty());
        assert!(!home.tagline.is_empty());

        let about: AboutContent = doc.section("about");
        assert!(!about.kpis.is_empty());

        let experience: Vec<Experience> = doc.section("experience");
        assert!(!experience.is_empty());
        assert!(!experience[0].responsibilities.is_empty());

        let skills: Vec<SkillCategory> = doc.section("skills");
        assert!(skills.iter().all(|c| !c.items.is_empty()));

        let projects: Vec<Project> = doc.section("projects");
        assert!(projects.iter().any(|p| !p.links.is_empty()));
    }

    #[test]
    fn test_section_defaults_on_shape_mismatch() {
        let doc = PortfolioDocument::from_str(r#"{"home": 42, "skills": "oops"}"#)
            .expect("literal should parse");

        let home: HomeContent = doc.section("home");
        assert_eq!(home, HomeContent::default());

        let skills: Vec<SkillCategory> = doc.section("skills");
        assert!(skills.is_empty());

        // entirely absent section
        let contact: ContactContent = doc.section("contact");
        assert_eq!(contact, ContactContent::default());
    }

    #[test]
    fn test_pretty_output_is_two_space_indented() {
        let doc = PortfolioDocument::from_str(r#"{"home":{"name":"x"}}"#)
            .expect("literal should parse");
        let pretty = doc.to_pretty();
        assert!(pretty.contains("\n  \"home\""));
        assert!(pretty.contains("\n    \"name\""));
    }
}
