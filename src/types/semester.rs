use crate::types::{DepartmentId, SemesterId};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Whether a semester falls in the odd or even slot of the academic year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum SemesterParity {
    Odd,
    Even,
}

impl fmt::Display for SemesterParity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SemesterParity::Odd => write!(f, "ODD"),
            SemesterParity::Even => write!(f, "EVEN"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Semester {
    pub id: SemesterId,
    pub department_id: DepartmentId,
    pub number: u8,
}

impl Semester {
    pub fn parity(&self) -> SemesterParity {
        if self.number % 2 == 1 {
            SemesterParity::Odd
        } else {
            SemesterParity::Even
        }
    }
}
