//! Static marketing copy, embedded at build time.

use std::collections::HashSet;

use serde::Deserialize;

use crate::error::ContentError;
use crate::simulator::PanelId;

const LANDING_JSON: &str = include_str!("landing.json");

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct Brand {
    pub lead: String,
    pub accent: String,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct Gate {
    pub greeting: String,
    pub message: String,
    pub button: String,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct Explainer {
    pub icon: String,
    pub title: String,
    pub body: String,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct Testimonial {
    pub id: u32,
    pub name: String,
    pub headline: String,
    pub story: String,
}

impl Testimonial {
    pub fn panel_id(&self) -> PanelId {
        PanelId(self.id)
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct OfferItem {
    pub title: String,
    pub description: String,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct Offer {
    pub badge: String,
    pub title: String,
    pub items: Vec<OfferItem>,
    pub note_lead: String,
    pub note: String,
    pub list_price: String,
    pub price: String,
    pub cta: String,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct Faq {
    pub question: String,
    pub answer: String,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct Footer {
    pub legal: String,
    pub tagline: String,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct LandingContent {
    pub brand: Brand,
    pub gate: Gate,
    pub explainers: Vec<Explainer>,
    pub testimonials: Vec<Testimonial>,
    pub offer: Offer,
    pub faqs: Vec<Faq>,
    pub footer: Footer,
}

impl LandingContent {
    pub fn load() -> Result<Self, ContentError> {
        Self::from_json(LANDING_JSON)
    }

    pub fn from_json(json: &str) -> Result<Self, ContentError> {
        let content: LandingContent = serde_json::from_str(json)?;
        let mut seen = HashSet::new();
        for testimonial in &content.testimonials {
            if !seen.insert(testimonial.id) {
                return Err(ContentError::DuplicatePanel(testimonial.id));
            }
        }
        Ok(content)
    }
}
