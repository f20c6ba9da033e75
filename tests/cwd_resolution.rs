// Changes the process working directory, so it lives in its own test binary
// and keeps to a single test.

use pathutil::get_relative_path;
use std::fs;
use tempfile::TempDir;

#[test]
fn relative_filepath_is_resolved_against_working_directory() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();

    let td = TempDir::new().unwrap();
    let project = td.path().join("project");
    fs::create_dir_all(project.join("src")).unwrap();
    std::env::set_current_dir(&project).unwrap();

    // Re-read so platform aliases (e.g. /var -> /private/var) match what the
    // helper sees.
    let cwd = std::env::current_dir().unwrap();
    let cwd = cwd.to_string_lossy().into_owned();

    let got = get_relative_path("src/main.rs", None).unwrap();
    assert_eq!(got, format!("{}/src/main.rs", cwd.trim_start_matches('/')));

    let got = get_relative_path("src/main.rs", Some(cwd.as_str())).unwrap();
    assert_eq!(got, "src/main.rs");

    let parent = cwd.rsplit_once('/').map(|(p, _)| p).unwrap();
    let got = get_relative_path("../sibling/a.txt", Some(parent)).unwrap();
    assert_eq!(got, "sibling/a.txt");

    // Nothing is checked on disk.
    let got = get_relative_path("missing/file.txt", Some(cwd.as_str())).unwrap();
    assert_eq!(got, "missing/file.txt");

    std::env::set_current_dir(td.path().parent().unwrap()).unwrap();
}
