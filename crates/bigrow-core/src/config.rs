//! Table configuration.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Identifies the table that rows are read from.
///
/// The service addresses tables by a fully-qualified resource name:
/// `projects/{project}/zones/{zone}/clusters/{cluster}/tables/{table}`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TableConfig {
    /// Project that owns the cluster.
    pub project: String,

    /// Zone the cluster runs in.
    pub zone: String,

    /// Cluster identifier.
    pub cluster: String,

    /// Table identifier.
    pub table: String,
}

impl TableConfig {
    /// Create a table configuration from its name components.
    pub fn new(
        project: impl Into<String>,
        zone: impl Into<String>,
        cluster: impl Into<String>,
        table: impl Into<String>,
    ) -> Self {
        Self {
            project: project.into(),
            zone: zone.into(),
            cluster: cluster.into(),
            table: table.into(),
        }
    }

    /// Parse a fully-qualified table name.
    pub fn parse(name: &str) -> Result<Self> {
        let parts: Vec<&str> = name.split('/').collect();
        match parts.as_slice() {
            ["projects", project, "zones", zone, "clusters", cluster, "tables", table] => {
                let config = Self::new(*project, *zone, *cluster, *table);
                config.validate()?;
                Ok(config)
            }
            _ => Err(Error::InvalidTableName(format!(
                "expected projects/*/zones/*/clusters/*/tables/*, got {:?}",
                name
            ))),
        }
    }

    /// Set the project.
    pub fn with_project(mut self, project: impl Into<String>) -> Self {
        self.project = project.into();
        self
    }

    /// Set the zone.
    pub fn with_zone(mut self, zone: impl Into<String>) -> Self {
        self.zone = zone.into();
        self
    }

    /// Set the cluster.
    pub fn with_cluster(mut self, cluster: impl Into<String>) -> Self {
        self.cluster = cluster.into();
        self
    }

    /// Set the table.
    pub fn with_table(mut self, table: impl Into<String>) -> Self {
        self.table = table.into();
        self
    }

    /// Check that every component is non-empty and free of `/`.
    pub fn validate(&self) -> Result<()> {
        for (label, value) in [
            ("project", &self.project),
            ("zone", &self.zone),
            ("cluster", &self.cluster),
            ("table", &self.table),
        ] {
            if value.is_empty() {
                return Err(Error::InvalidTableName(format!("{} is empty", label)));
            }
            if value.contains('/') {
                return Err(Error::InvalidTableName(format!(
                    "{} {:?} contains '/'",
                    label, value
                )));
            }
        }
        Ok(())
    }

    /// The fully-qualified table name.
    pub fn table_name(&self) -> String {
        format!(
            "projects/{}/zones/{}/clusters/{}/tables/{}",
            self.project, self.zone, self.cluster, self.table
        )
    }
}
