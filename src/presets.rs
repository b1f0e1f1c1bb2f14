//! Pre-built developer forms over [`Zenity::forms`].
//!
//! Each preset opens a fixed set of fields and maps the positional values
//! into a named struct. Cancel and extra-button clicks come back as `None`;
//! missing trailing values default to empty strings.

use serde::{Deserialize, Serialize};

use crate::client::Zenity;
use crate::fields::FormField;
use crate::options::{CommonOptions, FormsOptions};
use crate::outcome::FormsOutcome;

/// Conventional-commit message parts.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GitCommit {
    pub commit_type: String,
    pub scope: String,
    pub summary: String,
    pub description: String,
    pub breaking: String,
}

/// Bug report with reproduction details.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BugReport {
    pub title: String,
    pub severity: String,
    pub category: String,
    pub steps_to_reproduce: String,
    pub expected: String,
    pub actual: String,
}

/// One `~/.ssh/config` host entry.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SshHost {
    pub alias: String,
    pub hostname: String,
    pub user: String,
    pub port: String,
    pub identity_file: String,
}

/// Database connection parameters.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DatabaseConfig {
    pub engine: String,
    pub host: String,
    pub port: String,
    pub database: String,
    pub username: String,
    pub password: String,
    pub ssl: String,
}

/// Release bookkeeping.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReleaseVersion {
    pub current_version: String,
    pub release_type: String,
    pub new_version: String,
    pub changelog: String,
}

/// Credentials for an external API.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiCredentials {
    pub service: String,
    pub api_key: String,
    pub base_url: String,
    pub environment: String,
    pub rate_limit: String,
}

/// Conventional commit form.
pub async fn git_commit(zenity: &Zenity, title: &str) -> Option<GitCommit> {
    let fields = [
        FormField::combo(
            "Type",
            ["feat", "fix", "docs", "style", "refactor", "test", "chore", "perf"],
        ),
        FormField::entry("Scope (optional)"),
        FormField::entry("Summary"),
        FormField::multiline("Description (optional)"),
        FormField::combo("Breaking Change", ["No", "Yes"]),
    ];
    submit(zenity, &fields, title).await.map(|values| GitCommit {
        commit_type: field_at(&values, 0),
        scope: field_at(&values, 1),
        summary: field_at(&values, 2),
        description: field_at(&values, 3),
        breaking: field_at(&values, 4),
    })
}

/// Bug report form.
pub async fn bug_report(zenity: &Zenity, title: &str) -> Option<BugReport> {
    let fields = [
        FormField::entry("Title"),
        FormField::combo("Severity", ["Critical", "High", "Medium", "Low"]),
        FormField::combo("Type", ["Bug", "Regression", "Performance", "Security"]),
        FormField::multiline("Steps to Reproduce"),
        FormField::multiline("Expected Behavior"),
        FormField::multiline("Actual Behavior"),
    ];
    submit(zenity, &fields, title).await.map(|values| BugReport {
        title: field_at(&values, 0),
        severity: field_at(&values, 1),
        category: field_at(&values, 2),
        steps_to_reproduce: field_at(&values, 3),
        expected: field_at(&values, 4),
        actual: field_at(&values, 5),
    })
}

/// SSH host entry form.
pub async fn ssh_host(zenity: &Zenity, title: &str) -> Option<SshHost> {
    let fields = [
        FormField::entry("Host Alias"),
        FormField::entry("Hostname/IP"),
        FormField::entry("User"),
        FormField::entry("Port"),
        FormField::entry("Identity File"),
    ];
    submit(zenity, &fields, title).await.map(|values| SshHost {
        alias: field_at(&values, 0),
        hostname: field_at(&values, 1),
        user: field_at(&values, 2),
        port: field_at(&values, 3),
        identity_file: field_at(&values, 4),
    })
}

/// Database connection form.
pub async fn database_config(zenity: &Zenity, title: &str) -> Option<DatabaseConfig> {
    let fields = [
        FormField::combo(
            "Type",
            ["PostgreSQL", "MySQL", "MongoDB", "Redis", "SQLite"],
        ),
        FormField::entry("Host"),
        FormField::entry("Port"),
        FormField::entry("Database Name"),
        FormField::entry("Username"),
        FormField::password("Password"),
        FormField::combo("SSL", ["false", "true", "require"]),
    ];
    submit(zenity, &fields, title)
        .await
        .map(|values| DatabaseConfig {
            engine: field_at(&values, 0),
            host: field_at(&values, 1),
            port: field_at(&values, 2),
            database: field_at(&values, 3),
            username: field_at(&values, 4),
            password: field_at(&values, 5),
            ssl: field_at(&values, 6),
        })
}

/// Release version form.
pub async fn release_version(zenity: &Zenity, title: &str) -> Option<ReleaseVersion> {
    let fields = [
        FormField::entry("Current Version"),
        FormField::combo("Release Type", ["patch", "minor", "major", "custom"]),
        FormField::entry("New Version (if custom)"),
        FormField::multiline("Changelog Summary"),
    ];
    submit(zenity, &fields, title)
        .await
        .map(|values| ReleaseVersion {
            current_version: field_at(&values, 0),
            release_type: field_at(&values, 1),
            new_version: field_at(&values, 2),
            changelog: field_at(&values, 3),
        })
}

/// API credentials form.
pub async fn api_credentials(zenity: &Zenity, title: &str) -> Option<ApiCredentials> {
    let fields = [
        FormField::entry("Service Name"),
        FormField::password("API Key"),
        FormField::entry("Base URL"),
        FormField::combo("Environment", ["Development", "Staging", "Production"]),
        FormField::entry("Rate Limit (req/min)"),
    ];
    submit(zenity, &fields, title)
        .await
        .map(|values| ApiCredentials {
            service: field_at(&values, 0),
            api_key: field_at(&values, 1),
            base_url: field_at(&values, 2),
            environment: field_at(&values, 3),
            rate_limit: field_at(&values, 4),
        })
}

async fn submit(zenity: &Zenity, fields: &[FormField], title: &str) -> Option<Vec<String>> {
    let options = FormsOptions {
        common: CommonOptions {
            title: Some(title.to_string()),
            ..Default::default()
        },
        ..Default::default()
    };
    match zenity.forms(fields, &options).await {
        FormsOutcome::Submitted { values } => Some(values),
        FormsOutcome::Cancelled | FormsOutcome::ExtraAction => None,
    }
}

fn field_at(values: &[String], index: usize) -> String {
    values.get(index).cloned().unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::{database_config, git_commit, release_version};
    use crate::client::Zenity;
    use crate::launcher::RecordingLauncher;

    fn client(launcher: RecordingLauncher) -> (Zenity, Arc<RecordingLauncher>) {
        let launcher = Arc::new(launcher);
        (Zenity::with_launcher("zenity", launcher.clone()), launcher)
    }

    #[tokio::test]
    async fn database_config_maps_values_in_field_order() {
        let (zenity, _) = client(
            RecordingLauncher::new().reply_with(0, "PostgreSQL|db.internal|5432|app|admin|pw|require"),
        );
        let config = database_config(&zenity, "Database Config")
            .await
            .expect("submitted");
        assert_eq!(config.engine, "PostgreSQL");
        assert_eq!(config.host, "db.internal");
        assert_eq!(config.port, "5432");
        assert_eq!(config.database, "app");
        assert_eq!(config.username, "admin");
        assert_eq!(config.password, "pw");
        assert_eq!(config.ssl, "require");
    }

    #[tokio::test]
    async fn missing_trailing_values_default_to_empty() {
        let (zenity, _) = client(RecordingLauncher::new().reply_with(0, "1.2.3|patch"));
        let release = release_version(&zenity, "Release").await.expect("submitted");
        assert_eq!(release.current_version, "1.2.3");
        assert_eq!(release.release_type, "patch");
        assert_eq!(release.new_version, "");
        assert_eq!(release.changelog, "");
    }

    #[tokio::test]
    async fn cancel_yields_none() {
        let (zenity, _) = client(RecordingLauncher::new().reply_with(1, ""));
        assert!(git_commit(&zenity, "Git Commit").await.is_none());
    }

    #[tokio::test]
    async fn preset_renders_its_field_flags() {
        let (zenity, launcher) = client(RecordingLauncher::new().reply_with(1, ""));
        assert!(git_commit(&zenity, "Git Commit").await.is_none());
        let args = launcher.last_request().args;
        assert!(args.contains(&"--title=Git Commit".to_string()));
        assert!(args.contains(&"--add-entry=Summary".to_string()));
        assert!(args.contains(&"--add-multiline-entry=Description (optional)".to_string()));
        assert!(args
            .iter()
            .any(|a| a.starts_with("--combo-values=feat|fix|")));
    }
}
