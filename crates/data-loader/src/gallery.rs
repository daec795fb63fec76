//! Detail page photo layout.
//!
//! The gallery is a 4x2 grid: the first photo is a 2x2 hero on the left,
//! and up to four more photos fill the remaining 1x1 cells.

use crate::types::{Listing, RoomImage};

/// Number of 1x1 cells next to the hero image.
pub const GALLERY_TILE_LIMIT: usize = 4;

/// Photos of one listing arranged for the detail page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Gallery<'a> {
    pub hero: Option<&'a RoomImage>,
    pub tiles: &'a [RoomImage],
    total: usize,
}

impl Gallery<'_> {
    /// Photos that do not fit in the grid.
    pub fn hidden_count(&self) -> usize {
        self.total.saturating_sub(1 + self.tiles.len())
    }

    pub fn is_empty(&self) -> bool {
        self.hero.is_none()
    }
}

impl Listing {
    pub fn gallery(&self) -> Gallery<'_> {
        match self.images.split_first() {
            Some((hero, rest)) => Gallery {
                hero: Some(hero),
                tiles: &rest[..rest.len().min(GALLERY_TILE_LIMIT)],
                total: self.images.len(),
            },
            None => Gallery {
                hero: None,
                tiles: &[],
                total: 0,
            },
        }
    }
}
