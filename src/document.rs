//! Minimal query surface the scrapers are written against, so extraction
//! does not depend on a particular HTML parser's API.

use regex::Regex;
use scraper::{ElementRef, Html, Selector};

use crate::error::{Result, ScoresError};

/// A compiled "tag with attribute words" lookup. Build once, hold in a static.
#[derive(Debug, Clone)]
pub struct Find {
    css: String,
    selector: Selector,
}

impl Find {
    /// Elements named `tag` whose attributes each contain the given word
    /// (`[name~="value"]`). An empty `tag` matches any element.
    pub fn new(tag: &str, attrs: &[(&str, &str)]) -> Result<Self> {
        let mut css = if tag.is_empty() {
            "*".to_string()
        } else {
            tag.to_string()
        };
        for (name, value) in attrs {
            css.push_str(&format!("[{name}~=\"{value}\"]"));
        }
        let selector = Selector::parse(&css)
            .map_err(|e| ScoresError::parse(format!("bad selector {css}: {e}")))?;
        Ok(Self { css, selector })
    }

    pub fn css(&self) -> &str {
        &self.css
    }
}

pub trait Query<'a>: Copy {
    /// Matching descendants in document order.
    fn find(&self, query: &Find) -> Vec<Self>;

    /// Matching descendants whose `id` matches `pattern` anywhere.
    fn find_by_id_pattern(&self, query: &Find, pattern: &Regex) -> Vec<Self>;

    /// Concatenated text content, untrimmed.
    fn text_of(&self) -> String;

    fn attr_of(&self, name: &str) -> Option<&'a str>;

    fn first(&self, query: &Find) -> Option<Self> {
        self.find(query).into_iter().next()
    }
}

pub fn parse_document(html: &str) -> Html {
    Html::parse_document(html)
}

impl<'a> Query<'a> for ElementRef<'a> {
    fn find(&self, query: &Find) -> Vec<Self> {
        self.select(&query.selector).collect()
    }

    fn find_by_id_pattern(&self, query: &Find, pattern: &Regex) -> Vec<Self> {
        self.select(&query.selector)
            .filter(|el| el.value().id().is_some_and(|id| pattern.is_match(id)))
            .collect()
    }

    fn text_of(&self) -> String {
        self.text().collect()
    }

    fn attr_of(&self, name: &str) -> Option<&'a str> {
        self.value().attr(name)
    }
}
