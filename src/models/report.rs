use palette_align::Issue;
use serde::Serialize;
use std::fmt;
use std::path::PathBuf;

/// Files written for a sheet that validated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SpriteOutputs {
    pub front: PathBuf,
    pub back: PathBuf,
    pub normal_palette: PathBuf,
    pub shiny_palette: PathBuf,
}

/// One issue as shown to the uploader: the structured fields plus the
/// rendered sentence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReportIssue {
    pub message: String,
    #[serde(flatten)]
    pub issue: Issue,
}

impl From<Issue> for ReportIssue {
    fn from(issue: Issue) -> Self {
        Self {
            message: issue.to_string(),
            issue,
        }
    }
}

/// Outcome of one command, serialized as the `--json` output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Report {
    Success {
        /// Absent for checks that write nothing (icon)
        #[serde(flatten)]
        outputs: Option<SpriteOutputs>,
    },
    Failure {
        issues: Vec<ReportIssue>,
        #[serde(skip_serializing_if = "Option::is_none")]
        diff: Option<PathBuf>,
    },
}

impl Report {
    pub fn success(outputs: SpriteOutputs) -> Self {
        Report::Success {
            outputs: Some(outputs),
        }
    }

    pub fn passed() -> Self {
        Report::Success { outputs: None }
    }

    pub fn failure(issues: Vec<Issue>, diff: Option<PathBuf>) -> Self {
        Report::Failure {
            issues: issues.into_iter().map(ReportIssue::from).collect(),
            diff,
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Report::Success { .. })
    }

    /// Process exit code: 0 on success, 1 when the art has issues
    pub fn exit_code(&self) -> u8 {
        if self.is_success() {
            0
        } else {
            1
        }
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Report::Success { outputs: None } => write!(f, "OK"),
            Report::Success {
                outputs: Some(outputs),
            } => {
                writeln!(f, "OK")?;
                writeln!(f, "  front:  {}", outputs.front.display())?;
                writeln!(f, "  back:   {}", outputs.back.display())?;
                writeln!(f, "  normal: {}", outputs.normal_palette.display())?;
                write!(f, "  shiny:  {}", outputs.shiny_palette.display())
            }
            Report::Failure { issues, diff } => {
                write!(f, "Found {} issue(s):", issues.len())?;
                for issue in issues {
                    write!(f, "\n  - {}", issue.message)?;
                }
                if let Some(diff) = diff {
                    write!(f, "\nDiff: {}", diff.display())?;
                }
                Ok(())
            }
        }
    }
}
