use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// One portfolio entry as stored in the `projects` table.
#[derive(Deserialize, Clone, Debug, PartialEq)]
pub struct ProjectRecord {
    #[serde(deserialize_with = "id_as_text")]
    pub id: String,
    pub title: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub description: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub image: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub link: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub tech: Vec<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub results: Vec<String>,
    #[serde(default, deserialize_with = "lenient_detail")]
    pub content_project_modal: Option<ProjectDetail>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

#[derive(Deserialize, Clone, Debug, PartialEq)]
pub struct ProjectDetail {
    pub hero_title: String,
    pub hero_subtitle: String,
    #[serde(default)]
    pub description: String,
    pub challenge: DetailSection,
    pub solution: DetailSection,
    #[serde(default)]
    pub metrics: Vec<Metric>,
    #[serde(default)]
    pub testimonial: Option<Testimonial>,
    #[serde(default)]
    pub technologies: Technologies,
    #[serde(default)]
    pub demo_link: String,
    #[serde(default)]
    pub cta_text: String,
}

#[derive(Deserialize, Clone, Debug, PartialEq)]
pub struct DetailSection {
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub features: Vec<String>,
}

#[derive(Deserialize, Clone, Debug, PartialEq)]
pub struct Metric {
    pub value: String,
    pub label: String,
    #[serde(default)]
    pub description: String,
}

#[derive(Deserialize, Clone, Debug, PartialEq)]
pub struct Testimonial {
    pub quote: String,
    pub author: String,
    pub role: String,
    pub company: String,
}

#[derive(Deserialize, Clone, Debug, Default, PartialEq)]
pub struct Technologies {
    #[serde(default)]
    pub frontend: Vec<String>,
    #[serde(default)]
    pub backend: Vec<String>,
    #[serde(default)]
    pub infrastructure: Vec<String>,
}

impl ProjectRecord {
    pub fn detail(&self) -> Option<&ProjectDetail> {
        self.content_project_modal.as_ref()
    }

    pub fn has_external_link(&self) -> bool {
        !self.link.is_empty() && self.link != "#"
    }
}

impl ProjectDetail {
    /// Solution features shown under the hero, without their leading bullet.
    pub fn headline_features(&self) -> Vec<&str> {
        self.solution
            .features
            .iter()
            .take(3)
            .map(|feature| strip_bullet(feature))
            .collect()
    }

    pub fn headline_metrics(&self) -> &[Metric] {
        let end = self.metrics.len().min(4);
        &self.metrics[..end]
    }

    /// The booking CTA only makes sense for projects with a real demo.
    pub fn has_demo(&self) -> bool {
        !self.demo_link.is_empty() && self.demo_link != "#"
    }
}

impl Testimonial {
    pub fn initial(&self) -> String {
        self.author.chars().next().map(String::from).unwrap_or_default()
    }
}

pub fn strip_bullet(feature: &str) -> &str {
    match feature.strip_prefix('•').or_else(|| feature.strip_prefix('-')) {
        Some(rest) => rest.trim_start(),
        None => feature,
    }
}

fn id_as_text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawId {
        Number(i64),
        Text(String),
    }

    Ok(match RawId::deserialize(deserializer)? {
        RawId::Number(n) => n.to_string(),
        RawId::Text(s) => s,
    })
}

// Nullable columns render as empty instead of rejecting the row.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

// A broken payload hides the modal instead of dropping the whole project list.
fn lenient_detail<'de, D>(deserializer: D) -> Result<Option<ProjectDetail>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<Value>::deserialize(deserializer)?;
    Ok(match raw {
        None | Some(Value::Null) => None,
        Some(value) => match serde_json::from_value::<ProjectDetail>(value) {
            Ok(detail) => Some(detail),
            Err(e) => {
                log::warn!("ignoring malformed project detail payload: {}", e);
                None
            }
        },
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn detail_json() -> Value {
        json!({
            "hero_title": "Une table, un clic",
            "hero_subtitle": "Réservations en ligne pour un restaurant",
            "description": "Refonte complète",
            "challenge": { "title": "Le défi", "description": "Réservations par téléphone" },
            "solution": {
                "title": "La solution",
                "description": "Un site vitrine",
                "features": ["• Réservation", "- Menu digital", "Galerie", "SEO local"]
            },
            "metrics": [
                { "value": "+40%", "label": "Réservations", "description": "en 3 mois" },
                { "value": "2s", "label": "Chargement" },
                { "value": "4.8", "label": "Note" },
                { "value": "x2", "label": "Trafic" },
                { "value": "0", "label": "Appels manqués" }
            ],
            "technologies": { "frontend": ["React"], "backend": ["Supabase"] },
            "demo_link": "#",
            "cta_text": "Voir le site"
        })
    }

    fn project_json(id: Value, detail: Value) -> Value {
        json!({
            "id": id,
            "title": "Chez Awa",
            "description": "Restaurant",
            "image": "https://cdn.example/awa.png",
            "link": "https://awa.example",
            "tech": ["React", "Tailwind"],
            "results": ["+40% réservations"],
            "content_project_modal": detail,
            "created_at": "2024-03-01T10:00:00Z"
        })
    }

    #[test]
    fn numeric_and_text_ids_both_decode() {
        let numeric: ProjectRecord =
            serde_json::from_value(project_json(json!(7), Value::Null)).unwrap();
        let text: ProjectRecord =
            serde_json::from_value(project_json(json!("a1b2"), Value::Null)).unwrap();
        assert_eq!(numeric.id, "7");
        assert_eq!(text.id, "a1b2");
    }

    #[test]
    fn malformed_detail_decodes_to_none() {
        let record: ProjectRecord =
            serde_json::from_value(project_json(json!(1), json!({ "hero_title": 3 }))).unwrap();
        assert!(record.detail().is_none());
        assert_eq!(record.title, "Chez Awa");
    }

    #[test]
    fn missing_detail_key_is_none() {
        let mut value = project_json(json!(1), Value::Null);
        value.as_object_mut().unwrap().remove("content_project_modal");
        let record: ProjectRecord = serde_json::from_value(value).unwrap();
        assert!(record.detail().is_none());
        assert!(record.created_at.is_some());
    }

    #[test]
    fn detail_helpers_trim_and_cap() {
        let record: ProjectRecord =
            serde_json::from_value(project_json(json!(1), detail_json())).unwrap();
        let detail = record.detail().unwrap();
        assert_eq!(
            detail.headline_features(),
            vec!["Réservation", "Menu digital", "Galerie"]
        );
        assert_eq!(detail.headline_metrics().len(), 4);
        assert!(detail.challenge.features.is_empty());
        assert!(detail.technologies.infrastructure.is_empty());
        assert!(!detail.has_demo());
    }

    #[test]
    fn null_columns_decode_to_empty() {
        let mut value = project_json(json!(3), Value::Null);
        let row = value.as_object_mut().unwrap();
        for column in ["description", "image", "link", "tech", "results"] {
            row.insert(column.to_string(), Value::Null);
        }
        let record: ProjectRecord = serde_json::from_value(value).unwrap();
        assert!(record.description.is_empty());
        assert!(record.image.is_empty());
        assert!(record.tech.is_empty());
        assert!(record.results.is_empty());
        assert!(!record.has_external_link());
    }

    #[test]
    fn testimonial_initial_handles_accents() {
        let testimonial = Testimonial {
            quote: "Parfait".to_string(),
            author: "Élodie Kouassi".to_string(),
            role: "Gérante".to_string(),
            company: "Chez Awa".to_string(),
        };
        assert_eq!(testimonial.initial(), "É");
    }
}
