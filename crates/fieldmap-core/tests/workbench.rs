mod common;

use std::fs;

use calamine::{Data, Reader, Xlsx, open_workbook};
use tempfile::TempDir;

use fieldmap_core::{DialogOutcome, TransferOptions, Workbench};
use fieldmap_model::{
    CellValue, FieldMapping, OpenSourceResponse, PreviewRequest, TransferResponse, messages,
};
use fieldmap_output::{OutputFormat, SHEET_NAME};

use common::{ScriptedDialog, write_customers};

#[test]
fn cancelled_open_is_neutral() {
    let mut dialog = ScriptedDialog::new();
    assert_eq!(Workbench::default().open_source(&mut dialog), None);
    assert!(dialog.offered_extensions.contains(&"xlsx".to_string()));
    assert!(dialog.offered_extensions.contains(&"csv".to_string()));
}

#[test]
fn open_returns_path_and_fields() {
    let dir = TempDir::new().unwrap();
    let path = write_customers(dir.path());
    let mut dialog = ScriptedDialog::new().with_source(DialogOutcome::Selected(path.clone()));

    let response = Workbench::default().open_source(&mut dialog).unwrap();

    let OpenSourceResponse::Opened(source) = response else {
        panic!("expected opened source, got {response:?}");
    };
    assert_eq!(source.path, path);
    assert_eq!(source.fields, vec!["ID", "Name", "Value"]);
}

#[test]
fn unreadable_source_reports_parse_failure() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("broken.xlsx");
    fs::write(&path, b"not a workbook").unwrap();
    let mut dialog = ScriptedDialog::new().with_source(DialogOutcome::Selected(path));

    let response = Workbench::default().open_source(&mut dialog).unwrap();

    assert_eq!(response.error(), Some(messages::PARSE_FAILED));
}

#[test]
fn preview_messages() {
    let dir = TempDir::new().unwrap();
    let path = write_customers(dir.path());
    let workbench = Workbench::default();

    let data = workbench.preview_field(&PreviewRequest::new(&path, "Value"));
    assert_eq!(
        data.data(),
        Some(&[CellValue::Number(100.0), CellValue::Number(200.0)][..])
    );

    let missing = workbench.preview_field(&PreviewRequest::new(&path, "Email"));
    assert_eq!(missing.error(), Some("Field 'Email' not found in the file."));

    let blank = workbench.preview_field(&PreviewRequest::new(&path, ""));
    assert_eq!(blank.error(), Some(messages::PREVIEW_INPUTS_REQUIRED));

    let unreadable = workbench.preview_field(&PreviewRequest::new(dir.path().join("gone.xlsx"), "Name"));
    assert_eq!(unreadable.error(), Some(messages::PREVIEW_FAILED));
}

#[test]
fn transfer_writes_renamed_columns() {
    let dir = TempDir::new().unwrap();
    let source = write_customers(dir.path());
    let output = dir.path().join("out.xlsx");
    let mappings = vec![
        FieldMapping::new(&source, "Name", "Customer Name"),
        FieldMapping::new(&source, "Value", "Amount"),
    ];
    let mut dialog = ScriptedDialog::new().with_save(DialogOutcome::Selected(output.clone()));

    let response = Workbench::default().run_transfer(&mappings, &mut dialog);

    assert_eq!(response, TransferResponse::saved(&output));
    assert_eq!(dialog.suggested_names, vec!["data-transfer-output.xlsx"]);

    let mut workbook: Xlsx<_> = open_workbook(&output).unwrap();
    let range = workbook.worksheet_range(SHEET_NAME).unwrap();
    let rows: Vec<Vec<Data>> = range.rows().map(<[Data]>::to_vec).collect();
    assert_eq!(
        rows,
        vec![
            vec![Data::String("Customer Name".into()), Data::String("Amount".into())],
            vec![Data::String("Alice".into()), Data::Float(100.0)],
            vec![Data::String("Bob".into()), Data::Float(200.0)],
        ]
    );
}

#[test]
fn cancelled_save_writes_nothing() {
    let dir = TempDir::new().unwrap();
    let source = write_customers(dir.path());
    let mappings = vec![FieldMapping::new(&source, "Name", "Customer Name")];
    let mut dialog = ScriptedDialog::new();

    let response = Workbench::default().run_transfer(&mappings, &mut dialog);

    assert!(response.is_cancelled());
    assert_eq!(response.message(), "Save was canceled.");
    assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 1);
}

#[test]
fn empty_mappings_never_prompt() {
    let mut dialog = ScriptedDialog::new();

    let response = Workbench::default().run_transfer(&[], &mut dialog);

    assert_eq!(response, TransferResponse::failed(messages::NO_MAPPINGS));
    assert!(dialog.suggested_names.is_empty());
}

#[test]
fn bad_mapping_fails_before_prompting() {
    let dir = TempDir::new().unwrap();
    let source = write_customers(dir.path());
    let mappings = vec![FieldMapping::new(&source, "Email", "Mail")];
    let mut dialog = ScriptedDialog::new().with_save(DialogOutcome::Selected(dir.path().join("out.xlsx")));

    let response = Workbench::default().run_transfer(&mappings, &mut dialog);

    assert_eq!(response, TransferResponse::failed(messages::TRANSFER_FAILED));
    assert!(dialog.suggested_names.is_empty());
}

#[test]
fn options_control_name_and_format() {
    let dir = TempDir::new().unwrap();
    let source = write_customers(dir.path());
    let output = dir.path().join("export.dat");
    let workbench = Workbench::new(
        TransferOptions::new()
            .with_default_output_name("export.csv")
            .with_format(OutputFormat::Csv),
    );
    let mappings = vec![FieldMapping::new(&source, "ID", "Key")];
    let mut dialog = ScriptedDialog::new().with_save(DialogOutcome::Selected(output.clone()));

    let response = workbench.run_transfer(&mappings, &mut dialog);

    assert!(response.is_success());
    assert_eq!(dialog.suggested_names, vec!["export.csv"]);
    assert_eq!(fs::read_to_string(&output).unwrap(), "Key\n1\n2\n");
}

#[test]
fn responses_use_wire_shape() {
    let json = serde_json::to_value(TransferResponse::failed(messages::NO_MAPPINGS)).unwrap();
    assert_eq!(
        json,
        serde_json::json!({ "error": "No fields have been mapped for transfer." })
    );
}
