use url::Url;

use crate::model::Author;
use crate::ui::mvi::UiState;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InfoLink {
    pub title: &'static str,
    pub url: &'static str,
    pub footer: &'static str,
}

pub const CDC_GUIDANCE: InfoLink = InfoLink {
    title: "Making Water Safe in an Emergency",
    url: "https://www.cdc.gov/healthywater/emergency/making-water-safe.html",
    footer: "Learn about the different stages of cleaning water and how to make it clean for human consumption.",
};

pub const ABOUT_TEXT: &str = "This demo shows an approach to building apps with explicit dependency injection and unidirectional state management.";

#[derive(Debug, Clone, PartialEq, Default)]
pub struct InfoState {
    /// `None` until loaded, or if loading failed.
    pub author: Option<Author>,
}

impl UiState for InfoState {}

impl InfoState {
    pub fn guidance_url(&self) -> Option<Url> {
        Url::parse(CDC_GUIDANCE.url).ok()
    }
}
