//! End-to-end tests for the generation pipeline over a fake application tree.

use std::fs;
use std::path::Path;

use stubgen_cli::{GeneratorConfig, StubGenerator};
use tempfile::TempDir;

fn write(root: &Path, relative: &str, contents: &str) {
    let path = root.join(relative);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, contents).unwrap();
}

/// A small WHMCS-shaped tree: first-party code at the root and under
/// vendor/whmcs, foreign code under vendor/other.
fn fake_app() -> TempDir {
    let tmp = TempDir::new().unwrap();
    let root = tmp.path();

    write(
        root,
        "functions.php",
        r#"<?php
function logActivity($message, $userId = 0) {
    record($message);
}

function helperOutsideVendor(int $count = 1): int {
    return $count;
}
"#,
    );

    write(
        root,
        "vendor/other/lib/helpers.php",
        r#"<?php
function foreignHelper() {}

function localAPI($command, $values = [], $adminUser = '') {
    return [];
}
"#,
    );

    write(
        root,
        "vendor/other/lib/Collection.php",
        r#"<?php
namespace Illuminate\Support;

class Collection {}
"#,
    );

    write(
        root,
        "vendor/whmcs/whmcs-foundation/lib/Contracts.php",
        r#"<?php
namespace WHMCS;

interface Identifiable {
    public function id(): int;
}

interface Persistable extends Identifiable {
    public function save(): bool;
}
"#,
    );

    write(
        root,
        "vendor/whmcs/whmcs-foundation/lib/Model.php",
        r#"<?php
namespace WHMCS;

abstract class Model implements Persistable {
    public function id(): int {
        return 0;
    }

    public function save(): bool {
        return true;
    }
}

function foundationHelper(string $name = '') {}
"#,
    );

    write(
        root,
        "vendor/whmcs/whmcs-foundation/lib/Billing/Invoice.php",
        r#"<?php
namespace WHMCS\Billing;

use WHMCS\Model;

/**
 * An invoice issued to a client.
 */
class Invoice extends Model {
    const STATUS_PAID = 'Paid';

    public static string $table = 'tblinvoices';

    public function total(): float {
        return 0.0;
    }
}
"#,
    );

    // Skip-listed file: intentionally unparseable to prove it is never read.
    write(
        root,
        "vendor/whmcs/whmcs-foundation/lib/Mobile.php",
        "<?php class {{{",
    );

    tmp
}

fn generate(app: &TempDir) -> (TempDir, stubgen_cli::GenerateSummary) {
    let out = TempDir::new().unwrap();
    let generator = StubGenerator::new(
        app.path().to_path_buf(),
        out.path().to_path_buf(),
        GeneratorConfig::default(),
    );
    let summary = generator.run().unwrap();
    (out, summary)
}

#[test]
fn test_functions_outside_vendor_are_kept() {
    let app = fake_app();
    let (out, _) = generate(&app);

    let stub = fs::read_to_string(out.path().join("logActivity.php")).unwrap();
    assert!(stub.starts_with("<?php\nfunction logActivity("));
    // Bodies never survive into stubs
    assert!(!stub.contains("record"));

    let helper = fs::read_to_string(out.path().join("helperOutsideVendor.php")).unwrap();
    assert!(helper.contains("function helperOutsideVendor(int $count = 1) : int"));
}

#[test]
fn test_foreign_vendor_functions_need_the_allow_list() {
    let app = fake_app();
    let (out, _) = generate(&app);

    // Allow-listed name in a foreign vendor dir is still emitted
    let local_api = fs::read_to_string(out.path().join("localAPI.php")).unwrap();
    assert!(local_api.contains("function localAPI($command, $values = [], $adminUser = '')"));

    // Unlisted foreign vendor function is dropped
    assert!(!out.path().join("foreignHelper.php").exists());
}

#[test]
fn test_first_party_vendor_functions_are_kept() {
    let app = fake_app();
    let (out, _) = generate(&app);

    let stub = fs::read_to_string(out.path().join("foundationHelper.php")).unwrap();
    assert!(stub.contains("function foundationHelper(string $name = '')"));
}

#[test]
fn test_containers_filtered_by_namespace_prefix() {
    let app = fake_app();
    let (out, summary) = generate(&app);

    assert!(out.path().join("WHMCS_Billing_Invoice.php").exists());
    assert!(out.path().join("WHMCS_Model.php").exists());
    assert!(out.path().join("WHMCS_Identifiable.php").exists());
    assert!(!out.path().join("Illuminate_Support_Collection.php").exists());
    assert_eq!(summary.containers_written, 4);
}

#[test]
fn test_container_stub_contents() {
    let app = fake_app();
    let (out, _) = generate(&app);

    let stub = fs::read_to_string(out.path().join("WHMCS_Billing_Invoice.php")).unwrap();
    assert!(stub.starts_with("<?php\n\nnamespace WHMCS\\Billing;\n\n"));
    assert!(stub.contains("An invoice issued to a client."));
    assert!(stub.contains("class Invoice extends \\WHMCS\\Model"));
    assert!(stub.contains("public const STATUS_PAID = 'Paid';"));
    assert!(stub.contains("public static string $table = 'tblinvoices';"));
    assert!(stub.contains("public function total() : float\n    {\n    }\n"));
}

#[test]
fn test_inherited_members_stay_on_the_ancestor() {
    let app = fake_app();
    let (out, _) = generate(&app);

    // Model declares id() and save(); the Invoice stub carries only its own
    // members even though reflection-style flattening expands its interfaces.
    let invoice = fs::read_to_string(out.path().join("WHMCS_Billing_Invoice.php")).unwrap();
    assert!(!invoice.contains("function id"));
    assert!(!invoice.contains("function save"));

    let model = fs::read_to_string(out.path().join("WHMCS_Model.php")).unwrap();
    assert!(model.contains("public function id() : int"));
    assert!(model.contains("public function save() : bool"));
}

#[test]
fn test_inheritance_cycle_still_terminates() {
    let app = fake_app();
    write(
        app.path(),
        "vendor/whmcs/whmcs-foundation/lib/Loop.php",
        r#"<?php
namespace WHMCS;

class Loop extends Loop {}
"#,
    );

    let out = TempDir::new().unwrap();
    let generator = StubGenerator::new(
        app.path().to_path_buf(),
        out.path().to_path_buf(),
        GeneratorConfig::default(),
    );
    generator.run().unwrap();
    assert!(out.path().join("WHMCS_Loop.php").exists());
}

#[test]
fn test_interface_list_is_flattened_through_ancestors() {
    let app = fake_app();
    let (out, _) = generate(&app);

    // Invoice inherits Persistable (and through it Identifiable) from Model.
    let invoice = fs::read_to_string(out.path().join("WHMCS_Billing_Invoice.php")).unwrap();
    assert!(invoice.contains("implements \\WHMCS\\Persistable, \\WHMCS\\Identifiable"));

    // Model lists its own interface plus the interface's parent.
    let model = fs::read_to_string(out.path().join("WHMCS_Model.php")).unwrap();
    assert!(model.contains("abstract class Model implements \\WHMCS\\Persistable, \\WHMCS\\Identifiable"));

    // Interfaces flatten too: Persistable extends Identifiable only.
    let persistable = fs::read_to_string(out.path().join("WHMCS_Persistable.php")).unwrap();
    assert!(persistable.contains("interface Persistable extends \\WHMCS\\Identifiable"));
}

#[test]
fn test_skip_listed_files_are_never_parsed() {
    // Mobile.php contains a syntax error; the run only succeeds because the
    // skip list keeps it out of discovery.
    let app = fake_app();
    let (_, summary) = generate(&app);
    assert_eq!(summary.files_scanned, 6);
}

#[test]
fn test_syntax_error_aborts_the_run() {
    let app = fake_app();
    write(app.path(), "broken.php", "<?php function {{{");

    let out = TempDir::new().unwrap();
    let generator = StubGenerator::new(
        app.path().to_path_buf(),
        out.path().to_path_buf(),
        GeneratorConfig::default(),
    );
    assert!(generator.run().is_err());
}

#[test]
fn test_rerun_overwrites_unconditionally() {
    let app = fake_app();
    let (out, first) = generate(&app);

    let generator = StubGenerator::new(
        app.path().to_path_buf(),
        out.path().to_path_buf(),
        GeneratorConfig::default(),
    );
    let second = generator.run().unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_custom_config_changes_the_namespace_filter() {
    let app = fake_app();
    let out = TempDir::new().unwrap();

    let config = GeneratorConfig {
        namespace_prefix: "Illuminate\\".to_string(),
        ..GeneratorConfig::default()
    };
    let generator = StubGenerator::new(
        app.path().to_path_buf(),
        out.path().to_path_buf(),
        config,
    );
    generator.run().unwrap();

    assert!(out.path().join("Illuminate_Support_Collection.php").exists());
    assert!(!out.path().join("WHMCS_Model.php").exists());
}
