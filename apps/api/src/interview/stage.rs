use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Interview phase. Stored and serialized under its display name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Stage {
    #[serde(rename = "HR")]
    Hr,
    Behavioral,
    Technical,
}

impl Stage {
    pub const ALL: [Stage; 3] = [Stage::Hr, Stage::Behavioral, Stage::Technical];

    pub fn as_str(&self) -> &'static str {
        match self {
            Stage::Hr => "HR",
            Stage::Behavioral => "Behavioral",
            Stage::Technical => "Technical",
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Stage {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Stage::ALL
            .into_iter()
            .find(|stage| stage.as_str() == s)
            .ok_or_else(|| format!("Unknown stage '{s}'"))
    }
}

/// The job roles an interview can be started for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum JobRole {
    #[serde(rename = "Data Scientist")]
    DataScientist,
    #[serde(rename = "Software Engineer")]
    SoftwareEngineer,
    #[serde(rename = "IT Support")]
    ItSupport,
    #[serde(rename = "UI/UX Designer")]
    UiUxDesigner,
}

/// Selection order shown to the client.
pub const JOB_ROLES: [JobRole; 4] = [
    JobRole::DataScientist,
    JobRole::SoftwareEngineer,
    JobRole::ItSupport,
    JobRole::UiUxDesigner,
];

impl JobRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            JobRole::DataScientist => "Data Scientist",
            JobRole::SoftwareEngineer => "Software Engineer",
            JobRole::ItSupport => "IT Support",
            JobRole::UiUxDesigner => "UI/UX Designer",
        }
    }
}

impl fmt::Display for JobRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for JobRole {
    type Err = String;

    /// Exact match only: the role names are case- and whitespace-sensitive.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        JOB_ROLES
            .into_iter()
            .find(|role| role.as_str() == s)
            .ok_or_else(|| format!("Job role '{s}' is not one of the supported roles"))
    }
}
