//! Route-type lookup.

use std::collections::HashMap;
use std::path::Path;

use serde::Deserialize;

use crate::domain::{RouteId, RouteType};

use super::RegistryError;

/// Resolves a set of route types to the route ids belonging to them.
pub trait RouteTypeResolver: Send + Sync {
    /// Route ids of every known route whose type is in `types`.
    fn route_ids_by_type(&self, types: &[RouteType]) -> Vec<RouteId>;
}

/// One route entry in the reference file.
#[derive(Debug, Deserialize)]
struct RouteEntry {
    id: String,
    #[serde(rename = "type")]
    route_type: u16,
}

/// In-memory route metadata loaded from a JSON reference file.
///
/// The file is an array of `{"id": "...", "type": 1}` objects. Unknown
/// GTFS type codes are rejected at load time rather than silently
/// becoming unreachable filter targets.
#[derive(Debug, Default)]
pub struct RouteRegistry {
    by_type: HashMap<RouteType, Vec<RouteId>>,
}

impl RouteRegistry {
    /// Build a registry from (route id, route type) pairs.
    pub fn from_pairs(pairs: impl IntoIterator<Item = (RouteId, RouteType)>) -> Self {
        let mut by_type: HashMap<RouteType, Vec<RouteId>> = HashMap::new();
        for (route, route_type) in pairs {
            by_type.entry(route_type).or_default().push(route);
        }
        Self { by_type }
    }

    /// Load a registry from a JSON reference file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, RegistryError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| RegistryError::Io {
            path: path.display().to_string(),
            source,
        })?;

        let entries: Vec<RouteEntry> =
            serde_json::from_str(&json).map_err(|source| RegistryError::Json {
                path: path.display().to_string(),
                source,
            })?;

        let mut pairs = Vec::with_capacity(entries.len());
        for entry in entries {
            let route_type = RouteType::from_gtfs(entry.route_type).ok_or(
                RegistryError::UnknownRouteType {
                    route: entry.id.clone(),
                    code: entry.route_type,
                },
            )?;
            pairs.push((RouteId::new(entry.id), route_type));
        }

        Ok(Self::from_pairs(pairs))
    }

    /// Number of distinct route types with at least one route.
    pub fn len(&self) -> usize {
        self.by_type.len()
    }

    /// Whether the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.by_type.is_empty()
    }
}

impl RouteTypeResolver for RouteRegistry {
    fn route_ids_by_type(&self, types: &[RouteType]) -> Vec<RouteId> {
        types
            .iter()
            .filter_map(|t| self.by_type.get(t))
            .flatten()
            .cloned()
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn registry() -> RouteRegistry {
        RouteRegistry::from_pairs(vec![
            (RouteId::new("Red"), RouteType::Subway),
            (RouteId::new("Orange"), RouteType::Subway),
            (RouteId::new("1"), RouteType::Bus),
        ])
    }

    #[test]
    fn resolves_single_type() {
        let routes = registry().route_ids_by_type(&[RouteType::Subway]);
        assert_eq!(routes, vec![RouteId::new("Red"), RouteId::new("Orange")]);
    }

    #[test]
    fn resolves_multiple_types() {
        let routes = registry().route_ids_by_type(&[RouteType::Subway, RouteType::Bus]);
        assert_eq!(routes.len(), 3);
        assert!(routes.contains(&RouteId::new("1")));
    }

    #[test]
    fn type_with_no_routes_is_empty() {
        assert!(registry().route_ids_by_type(&[RouteType::Ferry]).is_empty());
        assert!(registry().route_ids_by_type(&[]).is_empty());
    }

    #[test]
    fn load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"[
                {{"id": "Red", "type": 1}},
                {{"id": "39", "type": 3}}
            ]"#
        )
        .unwrap();

        let registry = RouteRegistry::load(file.path()).unwrap();
        assert_eq!(
            registry.route_ids_by_type(&[RouteType::Bus]),
            vec![RouteId::new("39")]
        );
    }

    #[test]
    fn load_rejects_unknown_type_code() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"[{{"id": "X", "type": 42}}]"#).unwrap();

        assert!(matches!(
            RouteRegistry::load(file.path()),
            Err(RegistryError::UnknownRouteType { code: 42, .. })
        ));
    }
}
