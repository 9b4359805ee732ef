//! Structuring element definitions for morphological operations
//!
//! A structuring element defines the neighborhood shape used in erosion,
//! dilation, and derived transforms.

use dermafeat_core::{Error, Result};

/// Shape of a structuring element for morphological operations
#[derive(Debug, Clone, PartialEq)]
pub enum StructuringElement {
    /// Square element of given radius (side = 2*radius + 1)
    Square(usize),
    /// Cross (plus-shaped) element of given radius; radius 1 is the
    /// 4-connectivity neighborhood
    Cross(usize),
    /// Disk element of given radius
    Disk(usize),
}

impl Default for StructuringElement {
    fn default() -> Self {
        StructuringElement::Square(1)
    }
}

impl StructuringElement {
    /// Validate the structuring element, returning an error for invalid configurations
    pub fn validate(&self) -> Result<()> {
        match self {
            StructuringElement::Square(r)
            | StructuringElement::Cross(r)
            | StructuringElement::Disk(r) => {
                if *r == 0 {
                    return Err(Error::InvalidParameter {
                        name: "radius",
                        value: "0".to_string(),
                        reason: "structuring element radius must be at least 1".to_string(),
                    });
                }
                Ok(())
            }
        }
    }

    /// Get the radius of the structuring element
    pub fn radius(&self) -> usize {
        match self {
            StructuringElement::Square(r)
            | StructuringElement::Cross(r)
            | StructuringElement::Disk(r) => *r,
        }
    }

    /// Compute (dr, dc) offsets relative to center for all active cells
    pub fn offsets(&self) -> Vec<(isize, isize)> {
        let r = self.radius() as isize;
        match self {
            StructuringElement::Square(_) => {
                let mut offsets = Vec::new();
                for dr in -r..=r {
                    for dc in -r..=r {
                        offsets.push((dr, dc));
                    }
                }
                offsets
            }
            StructuringElement::Cross(_) => {
                let mut offsets = Vec::new();
                for d in -r..=r {
                    offsets.push((d, 0)); // vertical arm
                    if d != 0 {
                        offsets.push((0, d)); // horizontal arm (skip center duplicate)
                    }
                }
                offsets
            }
            StructuringElement::Disk(_) => {
                let mut offsets = Vec::new();
                for dr in -r..=r {
                    for dc in -r..=r {
                        if dr * dr + dc * dc <= r * r {
                            offsets.push((dr, dc));
                        }
                    }
                }
                offsets
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_square_offsets() {
        let se = StructuringElement::Square(1);
        let offsets = se.offsets();
        // 3x3 = 9 offsets
        assert_eq!(offsets.len(), 9);
        assert!(offsets.contains(&(0, 0)));
        assert!(offsets.contains(&(-1, -1)));
        assert!(offsets.contains(&(1, 1)));
    }

    #[test]
    fn test_cross_offsets() {
        let se = StructuringElement::Cross(1);
        let offsets = se.offsets();
        // Plus shape: center + 4 arms = 5
        assert_eq!(offsets.len(), 5);
        assert!(offsets.contains(&(0, 0)));
        assert!(offsets.contains(&(-1, 0)));
        assert!(offsets.contains(&(1, 0)));
        assert!(offsets.contains(&(0, -1)));
        assert!(offsets.contains(&(0, 1)));
        // Corners should NOT be present
        assert!(!offsets.contains(&(-1, -1)));
        assert!(!offsets.contains(&(1, 1)));
    }

    #[test]
    fn test_disk_offsets() {
        let se = StructuringElement::Disk(1);
        let offsets = se.offsets();
        // Disk(1): cells within distance 1.0 of center
        // Center + 4 cardinal = 5 (diagonals are sqrt(2) > 1.0)
        assert_eq!(offsets.len(), 5);
        assert!(offsets.contains(&(0, 0)));
        assert!(offsets.contains(&(-1, 0)));
    }

    #[test]
    fn test_validate_zero_radius() {
        assert!(StructuringElement::Square(0).validate().is_err());
        assert!(StructuringElement::Cross(0).validate().is_err());
        assert!(StructuringElement::Disk(0).validate().is_err());
    }

    #[test]
    fn test_default() {
        let se = StructuringElement::default();
        assert_eq!(se, StructuringElement::Square(1));
        assert_eq!(se.radius(), 1);
    }
}
