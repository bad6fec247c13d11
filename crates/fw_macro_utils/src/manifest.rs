use std::collections::BTreeMap;
use std::env;
use std::path::{Path, PathBuf};
use std::sync::{PoisonError, RwLock};
use std::time::SystemTime;

use toml_edit::{Document, Item, Table};

/// Locate an accessible [`syn::Path`] for a `fieldwire` member crate as seen
/// from the Cargo.toml of the crate invoking the macro.
///
/// # Example
///
/// ```rust
/// # use fw_macro_utils::Manifest;
/// let p: syn::Path = Manifest::shared(|m| m.get_crate_path("fw_schema"));
/// ```
///
/// Reading the manifest is not cheap; call this once per macro invocation and
/// pass the path around.
///
/// # Resolution rules
///
/// 1. If the requested crate is listed in `dependencies`, return `::crate_name`.
/// 2. If the requested crate name begins with `fw_` and the caller depends on
///    the facade crate `fieldwire`, return `::fieldwire::short_name`
///    (e.g. `fw_schema` -> `::fieldwire::schema`).
/// 3. If the requested crate name begins with `fw_` and the caller depends on
///    the alias `fw`, return `::fw::short_name`.
/// 4. Repeat steps 1-3 in `dev-dependencies`.
/// 5. Otherwise, fall back to `::crate_name`.
///
/// ## Note
///
/// A crate that derives on its own types should add
/// `extern crate self as crate_name;` to its root so that the fallback path
/// resolves inside the crate as well as in its doc tests.
#[derive(Debug)]
pub struct Manifest {
    pub manifest: Document<Box<str>>,
    pub modified_time: SystemTime,
}

const FACADE_NAME: &str = "fieldwire";
const SHORT_FACADE_NAME: &str = "fw";
const MEMBER_PREFIX: &str = "fw_";

impl Manifest {
    #[inline(never)]
    fn get_manifest_path() -> PathBuf {
        env::var_os("CARGO_MANIFEST_DIR")
            .map(|path| {
                let mut path = PathBuf::from(path);
                path.push("Cargo.toml");
                assert!(
                    path.exists(),
                    "Cargo manifest does not exist at path {}",
                    path.display(),
                );
                path
            })
            .expect("CARGO_MANIFEST_DIR should be auto-defined by cargo.")
    }

    #[inline(never)]
    fn get_manifest_modified_time(
        cargo_manifest_path: &Path,
    ) -> Result<SystemTime, std::io::Error> {
        std::fs::metadata(cargo_manifest_path).and_then(|metadata| metadata.modified())
    }

    #[inline(never)]
    fn read_manifest(path: &Path) -> Document<Box<str>> {
        let manifest = std::fs::read_to_string(path)
            .unwrap_or_else(|_| panic!("Unable to read cargo manifest: {}", path.display()))
            .into_boxed_str();
        Self::parse_manifest(manifest)
            .unwrap_or_else(|| panic!("Failed to parse cargo manifest: {}", path.display()))
    }

    fn parse_manifest(manifest: Box<str>) -> Option<Document<Box<str>>> {
        Document::parse(manifest).ok()
    }

    // Crate names and module names are always valid paths.
    #[inline]
    fn parse_str<T: syn::parse::Parse>(path: &str) -> T {
        syn::parse_str(path).unwrap_or_else(|_| panic!("`{path}` is not a valid path"))
    }

    fn find_in_deps(deps: &Table, name: &str) -> Option<syn::Path> {
        if deps.contains_key(name) {
            return Some(Self::parse_str(&format!("::{name}")));
        }

        let module = name.strip_prefix(MEMBER_PREFIX)?;
        [FACADE_NAME, SHORT_FACADE_NAME]
            .into_iter()
            .find(|facade| deps.contains_key(facade))
            .map(|facade| {
                let mut path = Self::parse_str::<syn::Path>(&format!("::{facade}"));
                path.segments.push(Self::parse_str(module));
                path
            })
    }

    /// Return a [`syn::Path`] for the package named `name` as resolved from this
    /// crate's Cargo.toml. See the type documentation for the resolution order.
    #[inline(never)]
    pub fn get_crate_path(&self, name: &str) -> syn::Path {
        ["dependencies", "dev-dependencies"]
            .into_iter()
            .find_map(|table| match self.manifest.get(table) {
                Some(Item::Table(deps)) => Self::find_in_deps(deps, name),
                _ => None,
            })
            .unwrap_or_else(|| Self::parse_str(&format!("::{name}")))
    }

    /// Run `func` against the caller's parsed Cargo.toml.
    ///
    /// Manifests are cached per path and re-read when their modification time
    /// changes.
    pub fn shared<R>(func: impl FnOnce(&Self) -> R) -> R {
        static MANIFESTS: RwLock<BTreeMap<PathBuf, Manifest>> = RwLock::new(BTreeMap::new());

        let manifest_path = Self::get_manifest_path();
        let modified_time = Self::get_manifest_modified_time(&manifest_path)
            .expect("The Cargo.toml should have a modified time.");

        let manifests = MANIFESTS.read().unwrap_or_else(PoisonError::into_inner);

        if let Some(manifest) = manifests.get(&manifest_path)
            && manifest.modified_time == modified_time
        {
            return func(manifest);
        }

        drop(manifests);

        let manifest = Manifest {
            manifest: Self::read_manifest(&manifest_path),
            modified_time,
        };

        let result = func(&manifest);

        MANIFESTS
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(manifest_path, manifest);

        result
    }
}

#[cfg(test)]
mod tests {
    use super::Manifest;

    fn path_string(path: &syn::Path) -> String {
        path.segments
            .iter()
            .map(|seg| seg.ident.to_string())
            .collect::<Vec<_>>()
            .join("::")
    }

    fn manifest(text: &str) -> Manifest {
        Manifest {
            manifest: Manifest::parse_manifest(text.into()).unwrap(),
            modified_time: std::time::SystemTime::UNIX_EPOCH,
        }
    }

    #[test]
    fn direct_dependency() {
        let m = manifest("[dependencies]\nfw_schema = \"0.0.1\"\n");
        let path = m.get_crate_path("fw_schema");
        assert!(path.leading_colon.is_some());
        assert_eq!(path_string(&path), "fw_schema");
    }

    #[test]
    fn facade_dependency() {
        let m = manifest("[dependencies]\nfieldwire = \"0.0.1\"\n");
        assert_eq!(path_string(&m.get_crate_path("fw_schema")), "fieldwire::schema");

        let m = manifest("[dependencies]\nfw = { package = \"fieldwire\" }\n");
        assert_eq!(path_string(&m.get_crate_path("fw_schema")), "fw::schema");
    }

    #[test]
    fn dev_dependency_and_fallback() {
        let m = manifest("[dev-dependencies]\nfieldwire = \"0.0.1\"\n");
        assert_eq!(path_string(&m.get_crate_path("fw_schema")), "fieldwire::schema");

        let m = manifest("[package]\nname = \"demo\"\n");
        assert_eq!(path_string(&m.get_crate_path("fw_schema")), "fw_schema");
    }
}
