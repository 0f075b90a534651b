use std::collections::BTreeMap;

use serde::Serialize;

use super::casing;
use super::module_path::ModulePath;

/// The substitution variables handed to the template renderer.
///
/// For each derived role (`pkg`, `module`, `project`, `pkg_name`,
/// `project_name`, `package_dir`) the set carries the raw value plus its
/// upper, UpperCamel, and lowerCamel renderings under fixed keys, 24 keys
/// in total. The set is complete even when role values are empty, and is
/// never recomputed once built. Iteration order is deterministic.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct TemplateVars {
    vars: BTreeMap<String, String>,
}

impl TemplateVars {
    /// Derive the full variable set from a dotted module path.
    ///
    /// Purely functional: no I/O, no global state, no failure mode. Every
    /// key is present even for degenerate paths whose roles are empty.
    pub fn derive(path: &ModulePath) -> Self {
        let mut vars = BTreeMap::new();

        insert_role(&mut vars, ["pkg", "PKG", "Pkg", "pkgLCamel"], path.package());
        insert_role(&mut vars, ["module", "MODULE", "Module", "moduleLCamel"], path.module());
        insert_role(&mut vars, ["project", "PROJECT", "Project", "projectLCamel"], path.project());
        insert_role(&mut vars, ["pkg_name", "PKG_NAME", "PkgName", "pkgName"], path.package_name());
        insert_role(
            &mut vars,
            ["project_name", "PROJECT_NAME", "ProjectName", "projectName"],
            path.project_name(),
        );
        insert_role(
            &mut vars,
            ["package_dir", "PACKAGE_DIR", "PackageDir", "packageDir"],
            &path.package_dir(),
        );

        Self { vars }
    }

    /// Look up a variable value by key.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.vars.get(key).map(String::as_str)
    }

    /// Number of variables. A derived set always holds 24.
    pub fn len(&self) -> usize {
        self.vars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }

    /// Iterate variables in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.vars.iter().map(|(key, value)| (key.as_str(), value.as_str()))
    }
}

/// Insert one role under its `[raw, upper, UpperCamel, lowerCamel]` keys.
fn insert_role(vars: &mut BTreeMap<String, String>, keys: [&str; 4], value: &str) {
    let [raw, upper, camel, lower] = keys;
    vars.insert(raw.to_string(), value.to_string());
    vars.insert(upper.to_string(), casing::upper(value));
    vars.insert(camel.to_string(), casing::upper_camel(value));
    vars.insert(lower.to_string(), casing::lower_camel(value));
}
