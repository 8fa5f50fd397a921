use crate::models::package::Package;
use dashmap::DashMap;
use std::sync::Arc;

/// In-memory package catalog
pub struct PackageCatalog {
    packages: DashMap<String, Arc<Package>>,
}

impl PackageCatalog {
    pub fn new() -> Self {
        Self {
            packages: DashMap::new(),
        }
    }

    /// Add a package to the catalog
    /// If a package with the same id already exists, it will be replaced
    pub fn add_package(&self, package: Package) {
        self.packages.insert(package.id.clone(), Arc::new(package));
    }

    /// Get a package by id
    pub fn get_package(&self, id: &str) -> Option<Arc<Package>> {
        self.packages.get(id).map(|entry| Arc::clone(entry.value()))
    }

    pub fn list(&self) -> Vec<Arc<Package>> {
        let mut packages: Vec<Arc<Package>> = self
            .packages
            .iter()
            .map(|entry| Arc::clone(entry.value()))
            .collect();
        packages.sort_by(|a, b| a.id.cmp(&b.id));
        packages
    }

    pub fn len(&self) -> usize {
        self.packages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.packages.is_empty()
    }
}

impl Default for PackageCatalog {
    fn default() -> Self {
        Self::new()
    }
}
