//! Morphological sequence operations
//!
//! Executes a chain of operations described by a string, each applied to
//! the result of the previous one.
//!
//! # Sequence String Format
//!
//! Operations are separated by `+` and whitespace is ignored.
//! Each operation begins with a case-insensitive character followed by
//! an integer parameter:
//!
//! - `d<r>` - Dilation with a ball of radius r
//! - `e<r>` - Erosion with a ball of radius r
//! - `o<r>` - Opening with a ball of radius r
//! - `c<r>` - Closing with a ball of radius r
//! - `tw<r>` - White top-hat (original - opening)
//! - `tb<r>` - Black top-hat (closing - original)
//! - `g<r>` - Gradient (dilation - erosion)
//! - `h<level>` - H-dome with `level > 0`
//!
//! # Examples
//!
//! ```
//! use morphomath_core::Function;
//! use morphomath_morph::sequence::{MorphSequence, morph_sequence};
//!
//! let seq = MorphSequence::parse("o2 + e1").unwrap();
//! assert_eq!(seq.ops().len(), 2);
//!
//! let f = Function::from_vec(vec![0, 0, 10, 0, 0]).unwrap();
//! let domes = morph_sequence(&f, "c1 + h4").unwrap();
//! assert_eq!(domes.as_slice(), &[0, 0, 4, 0, 0]);
//! ```

use crate::sel::StructuringElement;
use crate::{MorphError, MorphResult};
use morphomath_core::Function;

/// A parsed morphological operation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MorphOp {
    /// Dilation with a ball
    Dilate { radius: u32 },
    /// Erosion with a ball
    Erode { radius: u32 },
    /// Opening (erosion followed by dilation)
    Open { radius: u32 },
    /// Closing (dilation followed by erosion)
    Close { radius: u32 },
    /// Top-hat transform
    Tophat {
        /// true for white top-hat (original - opening), false for black (closing - original)
        white: bool,
        radius: u32,
    },
    /// Gradient (dilation - erosion)
    Gradient { radius: u32 },
    /// H-dome extraction
    HDome { level: i64 },
}

impl MorphOp {
    /// Radius of the ball used by this operation, if any
    pub fn radius(&self) -> Option<u32> {
        match self {
            MorphOp::Dilate { radius }
            | MorphOp::Erode { radius }
            | MorphOp::Open { radius }
            | MorphOp::Close { radius }
            | MorphOp::Tophat { radius, .. }
            | MorphOp::Gradient { radius } => Some(*radius),
            MorphOp::HDome { .. } => None,
        }
    }

    /// Apply this operation to a function
    ///
    /// Radii are capped at `len - 1`: a wider ball covers the same in-domain
    /// neighbourhoods.
    pub fn apply(&self, f: &Function) -> MorphResult<Function> {
        let max_radius = u32::try_from(f.len() - 1).unwrap_or(u32::MAX);
        let ball = |radius: u32| StructuringElement::ball(radius.min(max_radius));
        let out = match self {
            MorphOp::Dilate { radius } => crate::dilate(f, &ball(*radius)),
            MorphOp::Erode { radius } => crate::erode(f, &ball(*radius)),
            MorphOp::Open { radius } => crate::open(f, &ball(*radius)),
            MorphOp::Close { radius } => crate::close(f, &ball(*radius)),
            MorphOp::Tophat { white, radius } => {
                if *white {
                    crate::top_hat(f, &ball(*radius))
                } else {
                    crate::bottom_hat(f, &ball(*radius))
                }
            }
            MorphOp::Gradient { radius } => crate::gradient(f, &ball(*radius)),
            MorphOp::HDome { level } => crate::h_dome(f, *level)?,
        };
        Ok(out)
    }
}

/// A parsed morphological sequence
#[derive(Debug, Clone)]
pub struct MorphSequence {
    ops: Vec<MorphOp>,
}

impl MorphSequence {
    /// Parse a sequence string into a MorphSequence
    ///
    /// # Examples
    ///
    /// ```
    /// use morphomath_morph::sequence::MorphSequence;
    ///
    /// let seq = MorphSequence::parse("d3 + tw2 + h5").unwrap();
    /// assert_eq!(seq.len(), 3);
    /// ```
    pub fn parse(sequence: &str) -> MorphResult<Self> {
        if sequence.trim().is_empty() {
            return Err(MorphError::InvalidSequence("empty sequence".to_string()));
        }

        let parts: Vec<&str> = sequence.split('+').collect();
        let mut ops = Vec::with_capacity(parts.len());

        for (i, part) in parts.iter().enumerate() {
            let op_str: String = part.chars().filter(|c| !c.is_whitespace()).collect();
            if op_str.is_empty() {
                return Err(MorphError::InvalidSequence(format!(
                    "empty operation at position {}",
                    i + 1
                )));
            }
            ops.push(Self::parse_operation(&op_str)?);
        }

        Ok(MorphSequence { ops })
    }

    fn parse_operation(op_str: &str) -> MorphResult<MorphOp> {
        let mut chars = op_str.chars();
        let first_char = match chars.next() {
            Some(c) => c.to_ascii_lowercase(),
            None => return Err(MorphError::InvalidSequence("empty operation".to_string())),
        };

        match first_char {
            'd' | 'e' | 'o' | 'c' | 'g' => {
                let radius = Self::parse_radius(&op_str[1..], op_str)?;
                Ok(match first_char {
                    'd' => MorphOp::Dilate { radius },
                    'e' => MorphOp::Erode { radius },
                    'o' => MorphOp::Open { radius },
                    'c' => MorphOp::Close { radius },
                    _ => MorphOp::Gradient { radius },
                })
            }
            't' => {
                let white = match chars.next().map(|c| c.to_ascii_lowercase()) {
                    Some('w') => true,
                    Some('b') => false,
                    _ => {
                        return Err(MorphError::InvalidSequence(format!(
                            "invalid tophat operation '{}', expected 'tw<r>' or 'tb<r>'",
                            op_str
                        )));
                    }
                };
                let radius = Self::parse_radius(&op_str[2..], op_str)?;
                Ok(MorphOp::Tophat { white, radius })
            }
            'h' => {
                let level: i64 = op_str[1..].parse().map_err(|_| {
                    MorphError::InvalidSequence(format!("invalid level in '{}'", op_str))
                })?;
                if level <= 0 {
                    return Err(MorphError::InvalidSequence(format!(
                        "h-dome level must be > 0, got {}",
                        level
                    )));
                }
                Ok(MorphOp::HDome { level })
            }
            _ => Err(MorphError::InvalidSequence(format!(
                "unknown operation '{}' in '{}'",
                first_char, op_str
            ))),
        }
    }

    fn parse_radius(radius_str: &str, op_str: &str) -> MorphResult<u32> {
        radius_str.parse().map_err(|_| {
            MorphError::InvalidSequence(format!(
                "invalid radius '{}' in '{}'",
                radius_str, op_str
            ))
        })
    }

    /// Get the operations in this sequence
    pub fn ops(&self) -> &[MorphOp] {
        &self.ops
    }

    /// Get the number of operations in the sequence
    pub fn len(&self) -> usize {
        self.ops.len()
    }

    /// Check if the sequence is empty
    pub fn is_empty(&self) -> bool {
        self.ops.is_empty()
    }

    /// Run every operation in order, starting from `f`
    pub fn execute(&self, f: &Function) -> MorphResult<Function> {
        let mut result = f.clone();
        for op in &self.ops {
            result = op.apply(&result)?;
        }
        Ok(result)
    }
}

/// Execute a morphological sequence on a function
pub fn morph_sequence(f: &Function, sequence: &str) -> MorphResult<Function> {
    let seq = MorphSequence::parse(sequence)?;
    log::debug!(
        "executing sequence \"{}\" ({} ops) on {} samples",
        sequence,
        seq.len(),
        f.len()
    );
    seq.execute(f)
}
