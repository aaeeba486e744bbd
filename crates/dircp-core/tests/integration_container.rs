//! Integration test: a project tree with a library directory, resolved through
//! the container path the host stores, then filtered for the project view.

use dircp_core::container::{ContainerPath, DirectoryContainer, CONTAINER_ID};
use dircp_core::diagnostics::TracingSink;
use dircp_core::filter::VisibilityFilter;
use dircp_core::resolver::sort_libraries;
use dircp_core::DirectoryErrorKind;
use std::fs::{self, File};
use tempfile::tempdir;

#[test]
fn container_resolves_libraries_and_hides_them_from_the_view() {
    let project = tempdir().unwrap();
    let lib_dir = project.path().join("lib");
    fs::create_dir(&lib_dir).unwrap();
    for name in [
        "guava.jar",
        "guava-sources.jar",
        "guava-javadoc.jar",
        "commons.ZIP",
        "commons-src.zip",
        "notes.txt",
    ] {
        File::create(lib_dir.join(name)).unwrap();
    }
    fs::create_dir(lib_dir.join("nested")).unwrap();
    File::create(lib_dir.join("nested").join("hidden.jar")).unwrap();

    let raw = format!("{CONTAINER_ID}/lib/jar,zip");
    let path = ContainerPath::parse(&raw).unwrap();
    let container = DirectoryContainer::new(&path, project.path());
    assert!(container.is_valid());
    assert_eq!(container.description(), "/lib Libraries");

    let mut libs = container.libraries().unwrap();
    sort_libraries(&mut libs);
    assert_eq!(libs.len(), 2);

    assert_eq!(libs[0].main_path(), lib_dir.join("commons.ZIP"));
    assert_eq!(libs[0].source_path(), Some(lib_dir.join("commons-src.zip").as_path()));
    assert_eq!(libs[0].javadoc_path(), None);

    assert_eq!(libs[1].main_path(), lib_dir.join("guava.jar"));
    assert_eq!(
        libs[1].source_path(),
        Some(lib_dir.join("guava-sources.jar").as_path())
    );
    assert_eq!(
        libs[1].javadoc_path(),
        Some(lib_dir.join("guava-javadoc.jar").as_path())
    );

    let filter = VisibilityFilter::new(project.path(), TracingSink);
    let entries = [raw.as_str()];
    assert!(!filter.select(entries, &lib_dir.join("guava-sources.jar")));
    assert!(filter.select(entries, &lib_dir.join("notes.txt")));
    assert!(filter.select(entries, &lib_dir.join("nested").join("hidden.jar")));
}

#[test]
fn container_over_missing_directory_reports_not_found() {
    let project = tempdir().unwrap();
    let path = ContainerPath::new("missing", ["jar"]).unwrap();
    let container = DirectoryContainer::new(&path, project.path());
    assert!(!container.is_valid());
    let err = container.libraries().unwrap_err();
    assert_eq!(err.kind, DirectoryErrorKind::NotFound);
}
