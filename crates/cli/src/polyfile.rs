//! JSON save/load of raw contour vertex data.
//!
//! Collaborator-side feature: the engine itself has no file format, so the
//! on-disk shape is just one array of [x, y] pairs per closed contour.

use std::path::Path;

use anyhow::Result;
use polyhit::ContourSet;
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Serialize)]
pub struct PolyFile {
    pub contours: Vec<Vec<[f64; 2]>>,
}

impl PolyFile {
    pub fn from_contours(set: &ContourSet) -> Self {
        Self {
            contours: set
                .contours()
                .map(|ring| ring.iter().map(|p| [p.x, p.y]).collect())
                .collect(),
        }
    }

    pub fn into_contours(self) -> ContourSet {
        let mut set = ContourSet::new();
        for ring in self.contours {
            for [x, y] in ring {
                set.append(x, y);
            }
            set.close_contour();
        }
        set
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        std::fs::write(path, serde_json::to_vec_pretty(self)?)?;
        Ok(())
    }

    pub fn load(path: &Path) -> Result<Self> {
        Ok(serde_json::from_slice(&std::fs::read(path)?)?)
    }
}
