//! End-to-end tests: form state to PDF file on disk

use chrono::{DateTime, TimeZone, Utc};
use form_model::{FeatureRequestField, FormState, FormUpdate, ListSection};
use store::pdf::PdfExportOptions;
use store::{export_onboarding_pdf, export_onboarding_pdf_at, ExportSettings};
use tempfile::TempDir;

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_test_writer()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .try_init();
}

fn instant() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 5, 1, 12, 30, 45).unwrap()
}

fn settings(dir: &TempDir, compress: bool) -> ExportSettings {
    let mut settings = ExportSettings::default().with_output_dir(dir.path());
    settings.pdf = PdfExportOptions::new().with_compression(compress);
    settings
}

fn busy_state(requests: usize) -> FormState {
    (0..requests).fold(
        FormState::new().update(FormUpdate::AccountName { value: "Acme Corp".into() }),
        |state, i| {
            state
                .update(FormUpdate::AddItem { section: ListSection::FeatureRequests })
                .update(FormUpdate::FeatureRequest {
                    index: i,
                    field: FeatureRequestField::Description(format!("Request {i}")),
                })
        },
    )
}

#[test]
fn test_written_file_is_a_complete_pdf() {
    init_tracing();
    let dir = TempDir::new().unwrap();

    let report = export_onboarding_pdf_at(&busy_state(40), &settings(&dir, false), instant()).unwrap();
    let bytes = std::fs::read(&report.path).unwrap();
    let pdf = String::from_utf8_lossy(&bytes);

    assert!(report.page_count > 1);
    assert!(bytes.starts_with(b"%PDF-"));
    assert!(pdf.trim_end().ends_with("%%EOF"));
    assert!(pdf.contains(&format!("/Count {}", report.page_count)));
    assert_eq!(pdf.matches("/Type /Page ").count(), report.page_count);
    assert_eq!(bytes.len() as u64, report.size_bytes);
}

#[test]
fn test_pdf_contains_form_text() {
    let dir = TempDir::new().unwrap();

    let report = export_onboarding_pdf_at(&busy_state(2), &settings(&dir, false), instant()).unwrap();
    let pdf = String::from_utf8_lossy(&std::fs::read(&report.path).unwrap()).into_owned();

    assert!(pdf.contains("(Onboarding Form) Tj"));
    assert!(pdf.contains("(Generated on: 2024-05-01 12:30:45 UTC) Tj"));
    assert!(pdf.contains("(\\225 Account Name: Acme Corp) Tj"));
    assert!(pdf.contains("(Description: Request 1) Tj"));
    assert!(pdf.contains("/BaseFont /Helvetica"));
}

#[test]
fn test_compressed_export_is_smaller() {
    let dir = TempDir::new().unwrap();
    let plain_dir = TempDir::new().unwrap();
    let state = busy_state(20);

    let compressed = export_onboarding_pdf_at(&state, &settings(&dir, true), instant()).unwrap();
    let plain = export_onboarding_pdf_at(&state, &settings(&plain_dir, false), instant()).unwrap();

    assert_eq!(compressed.page_count, plain.page_count);
    assert_eq!(compressed.file_name, plain.file_name);
    assert!(compressed.size_bytes < plain.size_bytes);
}

#[test]
fn test_export_is_deterministic_for_fixed_instant() {
    let first_dir = TempDir::new().unwrap();
    let second_dir = TempDir::new().unwrap();
    let state = busy_state(5);

    let first = export_onboarding_pdf_at(&state, &settings(&first_dir, true), instant()).unwrap();
    let second = export_onboarding_pdf_at(&state, &settings(&second_dir, true), instant()).unwrap();

    assert_eq!(
        std::fs::read(&first.path).unwrap(),
        std::fs::read(&second.path).unwrap()
    );
}

#[test]
fn test_empty_account_uses_default_file_name() {
    let dir = TempDir::new().unwrap();

    let report = export_onboarding_pdf(&FormState::new(), &settings(&dir, true)).unwrap();

    assert!(report.file_name.starts_with("onboarding_"));
    assert!(report.file_name.ends_with(".pdf"));
    assert!(report.path.exists());
}

#[test]
fn test_settings_file_drives_export() {
    let dir = TempDir::new().unwrap();
    let settings_path = dir.path().join("settings.json");
    let output_dir = dir.path().join("pdfs");
    std::fs::write(
        &settings_path,
        format!(
            r#"{{ "outputDir": {:?}, "pdf": {{ "author": "Solutions Team", "compress": false }} }}"#,
            output_dir.display().to_string()
        ),
    )
    .unwrap();

    let settings = ExportSettings::load(&settings_path).unwrap();
    let report = export_onboarding_pdf_at(&FormState::new(), &settings, instant()).unwrap();

    assert_eq!(report.path.parent(), Some(output_dir.as_path()));
    let pdf = String::from_utf8_lossy(&std::fs::read(&report.path).unwrap()).into_owned();
    assert!(pdf.contains("/Author (Solutions Team)"));
}
