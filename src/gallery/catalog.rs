//! Static Content Store
//!
//! The fixed artwork collection and the category index used to suggest
//! related pieces. Everything here is `'static` and never mutated.

use serde::Serialize;
use std::fmt;
use std::str::FromStr;

use super::error::GalleryError;

/// Artwork identifier (unique, positive)
pub type ArtworkId = u32;

/// Artwork category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Classical,
    Modern,
    Landscape,
    Portrait,
    Sculpture,
}

impl Category {
    pub const ALL: [Category; 5] = [
        Category::Classical,
        Category::Modern,
        Category::Landscape,
        Category::Portrait,
        Category::Sculpture,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Classical => "classical",
            Category::Modern => "modern",
            Category::Landscape => "landscape",
            Category::Portrait => "portrait",
            Category::Sculpture => "sculpture",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = GalleryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .iter()
            .copied()
            .find(|c| c.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| GalleryError::UnknownCategory(s.to_string()))
    }
}

/// A single piece in the collection
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Artwork {
    pub id: ArtworkId,
    pub title: &'static str,
    pub artist: &'static str,
    pub year: i32,
    pub category: Category,
    pub description: &'static str,
    pub image: &'static str,
}

impl Artwork {
    /// First `max_chars` characters of the description, cut on a char boundary.
    pub fn excerpt(&self, max_chars: usize) -> &'static str {
        match self.description.char_indices().nth(max_chars) {
            Some((idx, _)) => &self.description[..idx],
            None => self.description,
        }
    }
}

static ARTWORKS: [Artwork; 5] = [
    Artwork {
        id: 1,
        title: "Starry Night",
        artist: "Vincent van Gogh",
        year: 1889,
        category: Category::Classical,
        description: "A swirling night sky over a French village, one of the most recognized pieces in modern art. This masterpiece showcases van Gogh's unique post-impressionist style with bold brushstrokes and vivid colors.",
        image: "https://via.placeholder.com/600x400/1e3a5f/ffffff?text=Starry+Night",
    },
    Artwork {
        id: 2,
        title: "Composition VIII",
        artist: "Wassily Kandinsky",
        year: 1923,
        category: Category::Modern,
        description: "An abstract geometric composition featuring circles, lines, and triangles in vibrant colors. Kandinsky's work represents the pinnacle of abstract art, exploring the relationship between color and form.",
        image: "https://via.placeholder.com/600x400/8b4513/ffffff?text=Composition+VIII",
    },
    Artwork {
        id: 3,
        title: "Mountain Mist",
        artist: "Ansel Adams",
        year: 1948,
        category: Category::Landscape,
        description: "A breathtaking black and white photograph of mountain peaks emerging through morning mist. Adams' masterful use of light and shadow creates a dramatic and timeless landscape.",
        image: "https://via.placeholder.com/600x400/2f4f4f/ffffff?text=Mountain+Mist",
    },
    Artwork {
        id: 4,
        title: "Girl with a Pearl Earring",
        artist: "Johannes Vermeer",
        year: 1665,
        category: Category::Portrait,
        description: "Often called the 'Mona Lisa of the North,' this captivating portrait features a young girl wearing an exotic dress and a large pearl earring. The painting is renowned for its intimate composition and the subject's enigmatic gaze.",
        image: "https://via.placeholder.com/600x400/4b0082/ffffff?text=Girl+with+Pearl+Earring",
    },
    Artwork {
        id: 5,
        title: "The Thinker",
        artist: "Auguste Rodin",
        year: 1904,
        category: Category::Sculpture,
        description: "A bronze sculpture depicting a nude male figure sitting on a rock, chin resting on one hand, deep in thought. Originally part of 'The Gates of Hell,' this has become one of the most famous sculptures in the world.",
        image: "https://via.placeholder.com/600x400/cd853f/ffffff?text=The+Thinker",
    },
];

/// Number of pieces shown on the home panel
pub const FEATURED_COUNT: usize = 3;

/// All artworks, in display order
pub fn artworks() -> &'static [Artwork] {
    &ARTWORKS
}

/// Look up an artwork by id
pub fn find(id: ArtworkId) -> Option<&'static Artwork> {
    ARTWORKS.iter().find(|a| a.id == id)
}

/// The featured subset: the first [`FEATURED_COUNT`] artworks
pub fn featured() -> &'static [Artwork] {
    &ARTWORKS[..FEATURED_COUNT.min(ARTWORKS.len())]
}

/// Ids listed as related for a category. Not every artwork appears.
pub fn related_ids(category: Category) -> &'static [ArtworkId] {
    match category {
        Category::Classical => &[1, 4],
        Category::Modern => &[2],
        Category::Landscape => &[3],
        Category::Portrait => &[4, 1],
        Category::Sculpture => &[5],
    }
}
