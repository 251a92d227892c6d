//! Technical stack categories and their selections
//!
//! Every category offers a fixed option list ending in the `"Other"`
//! sentinel. The free-text overflow value of a selection only carries meaning
//! while `"Other"` is among the selected options.

use crate::{FormModelError, Result, YesNo};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Sentinel option that enables the free-text overflow field
pub const OTHER_OPTION: &str = "Other";

/// A named dimension of tooling
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum StackCategory {
    SourceControl,
    CiCd,
    Registry,
    CloudDeployment,
    /// Container orchestration platform
    Kubernetes,
    ProjectManagement,
    /// Developer alerting channel
    DevAlerts,
}

impl StackCategory {
    /// All categories in declaration order
    pub const ALL: [StackCategory; 7] = [
        StackCategory::SourceControl,
        StackCategory::CiCd,
        StackCategory::Registry,
        StackCategory::CloudDeployment,
        StackCategory::Kubernetes,
        StackCategory::ProjectManagement,
        StackCategory::DevAlerts,
    ];

    /// Key used when rendering the category line
    pub fn key(&self) -> &'static str {
        match self {
            StackCategory::SourceControl => "sourceControl",
            StackCategory::CiCd => "ciCd",
            StackCategory::Registry => "registry",
            StackCategory::CloudDeployment => "cloudDeployment",
            StackCategory::Kubernetes => "kubernetes",
            StackCategory::ProjectManagement => "projectManagement",
            StackCategory::DevAlerts => "devAlerts",
        }
    }

    /// Human-readable label shown by the form
    pub fn label(&self) -> &'static str {
        match self {
            StackCategory::SourceControl => "Source Control",
            StackCategory::CiCd => "CI/CD",
            StackCategory::Registry => "Registry",
            StackCategory::CloudDeployment => "Cloud Deployment",
            StackCategory::Kubernetes => "Kubernetes",
            StackCategory::ProjectManagement => "Project Management",
            StackCategory::DevAlerts => "Dev Alerts",
        }
    }

    /// Fixed option list offered for this category
    pub fn options(&self) -> &'static [&'static str] {
        match self {
            StackCategory::SourceControl => &[
                "GitHub",
                "GitLab Cloud",
                "GitLab On-Prem",
                "BitBucket Cloud",
                "BitBucket On-Prem",
                "Azure Repos",
                "Azure TFS",
                "Gerrit",
                "AWS Code Commit",
                OTHER_OPTION,
            ],
            StackCategory::CiCd => &[
                "Azure Pipelines",
                "CircleCI",
                "Drone CI",
                "GitHub Actions",
                "GitLab CI/CD",
                "Jenkins",
                OTHER_OPTION,
            ],
            StackCategory::Registry => &[
                "Amazon ECR",
                "Azure Container Registry",
                "Docker Hub",
                "GitLab Container Registry",
                "Google Artifact Registry",
                "Harbor",
                "JFrog Artifactory",
                OTHER_OPTION,
            ],
            StackCategory::CloudDeployment => &["AWS", "Azure", OTHER_OPTION],
            StackCategory::Kubernetes => &["AKS", "EKS", OTHER_OPTION],
            StackCategory::ProjectManagement => &[
                "Jira",
                "Asana",
                "Azure Boards",
                "Github Issues",
                "Monday",
                "ServiceNow",
                OTHER_OPTION,
            ],
            StackCategory::DevAlerts => &["Slack", "Microsoft Teams", OTHER_OPTION],
        }
    }

    /// Whether `option` is one of this category's fixed options
    pub fn is_known_option(&self, option: &str) -> bool {
        self.options().contains(&option)
    }
}

impl FromStr for StackCategory {
    type Err = FormModelError;

    fn from_str(s: &str) -> Result<Self> {
        StackCategory::ALL
            .into_iter()
            .find(|c| c.key() == s)
            .ok_or_else(|| FormModelError::UnknownCategory(s.to_string()))
    }
}

/// Selected options for one category plus the "Other" overflow text
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StackSelection {
    /// Selected option labels, unique, in selection order
    pub selected: Vec<String>,
    /// Free text used only when `"Other"` is selected
    pub other: String,
}

impl StackSelection {
    /// Build a selection, collapsing duplicate labels to their first occurrence
    pub fn new<I, S>(options: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut selected: Vec<String> = Vec::new();
        for option in options {
            let option = option.into();
            if !selected.contains(&option) {
                selected.push(option);
            }
        }
        Self {
            selected,
            other: String::new(),
        }
    }

    /// Whether the `"Other"` sentinel is selected
    pub fn includes_other(&self) -> bool {
        self.selected.iter().any(|s| s == OTHER_OPTION)
    }

    /// The overflow text, if it is meaningful for the current selection
    pub fn other_text(&self) -> Option<&str> {
        if self.includes_other() && !self.other.is_empty() {
            Some(&self.other)
        } else {
            None
        }
    }

    /// Selected options joined by `", "`, with a non-empty overflow text
    /// appended in parentheses after the `"Other"` entry.
    pub fn display_value(&self) -> String {
        let other_text = self.other_text();
        self.selected
            .iter()
            .map(|option| match other_text {
                Some(text) if option == OTHER_OPTION => format!("{OTHER_OPTION} ({text})"),
                _ => option.clone(),
            })
            .collect::<Vec<_>>()
            .join(", ")
    }
}

/// Technical stack section of the form
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TechnicalStack {
    pub source_control: StackSelection,
    /// Answer to "Multi Token?", asked alongside source control
    pub multi_token: Option<YesNo>,
    pub ci_cd: StackSelection,
    pub registry: StackSelection,
    pub cloud_deployment: StackSelection,
    pub kubernetes: StackSelection,
    pub project_management: StackSelection,
    pub dev_alerts: StackSelection,
}

impl TechnicalStack {
    /// Get the selection for a category
    pub fn get(&self, category: StackCategory) -> &StackSelection {
        match category {
            StackCategory::SourceControl => &self.source_control,
            StackCategory::CiCd => &self.ci_cd,
            StackCategory::Registry => &self.registry,
            StackCategory::CloudDeployment => &self.cloud_deployment,
            StackCategory::Kubernetes => &self.kubernetes,
            StackCategory::ProjectManagement => &self.project_management,
            StackCategory::DevAlerts => &self.dev_alerts,
        }
    }

    /// Get a mutable selection for a category
    pub fn get_mut(&mut self, category: StackCategory) -> &mut StackSelection {
        match category {
            StackCategory::SourceControl => &mut self.source_control,
            StackCategory::CiCd => &mut self.ci_cd,
            StackCategory::Registry => &mut self.registry,
            StackCategory::CloudDeployment => &mut self.cloud_deployment,
            StackCategory::Kubernetes => &mut self.kubernetes,
            StackCategory::ProjectManagement => &mut self.project_management,
            StackCategory::DevAlerts => &mut self.dev_alerts,
        }
    }

    /// Iterate over categories and their selections in declaration order
    pub fn iter(&self) -> impl Iterator<Item = (StackCategory, &StackSelection)> {
        StackCategory::ALL.into_iter().map(move |c| (c, self.get(c)))
    }
}
