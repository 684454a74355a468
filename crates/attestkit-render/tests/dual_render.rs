//! Preview and export must show the same text for every document type

use attestkit_core::{generate, GenerationContext};
use attestkit_model::{DocumentTypeId, FieldKind, FieldName, FieldValues};
use attestkit_render::{
    export_text, normalize_whitespace, preview_text, render_document, render_exportable,
    render_preview, ExportSettings, RenderSettings,
};
use chrono::NaiveDate;

fn ctx() -> GenerationContext {
    GenerationContext::new(NaiveDate::from_ymd_opt(2024, 3, 5).unwrap())
}

fn full_record() -> FieldValues {
    FieldName::ALL
        .into_iter()
        .filter(|f| f.is_form_field())
        .map(|f| {
            let value = match f {
                FieldName::Civility | FieldName::PartnerCivility => "Monsieur".to_string(),
                FieldName::CodePostal => "75011".to_string(),
                FieldName::Siret => "73282932000074".to_string(),
                FieldName::Email => "jean.martin@exemple.fr".to_string(),
                other => match other.kind() {
                    FieldKind::Date => "2023-09-01".to_string(),
                    FieldKind::Number => "1250.5".to_string(),
                    FieldKind::Select => other
                        .options()
                        .and_then(|o| o.last())
                        .map(|o| o.to_string())
                        .unwrap_or_default(),
                    _ => format!("Texte {}", other.key()),
                },
            };
            (f, value)
        })
        .collect()
}

fn records() -> Vec<(&'static str, FieldValues)> {
    let full = full_record();
    let signed = full.clone().with(FieldName::SignedAt, "2024-03-05T09:15:00");
    vec![
        ("empty", FieldValues::new()),
        ("full", full),
        ("signed", signed),
    ]
}

#[test]
fn test_preview_and_export_text_match() {
    let settings = RenderSettings::default();
    for (label, values) in records() {
        for id in DocumentTypeId::ALL {
            let rendered = render_document(id, &values, &ctx(), &settings);
            assert_eq!(
                normalize_whitespace(&preview_text(&rendered.preview)),
                normalize_whitespace(&export_text(&rendered.export)),
                "{} / {}",
                id,
                label
            );
        }
    }
}

#[test]
fn test_match_survives_pagination() {
    // Tiny pages force every block onto its own page
    let settings = ExportSettings {
        lines_per_page: 3,
        chars_per_line: 20,
        ..ExportSettings::default()
    };
    let values = full_record();
    for id in DocumentTypeId::ALL {
        let body = generate(id, &values, &ctx());
        let preview = render_preview(&body, &values);
        let export = render_exportable(&body, &values, &settings);
        assert!(export.page_count() > 1, "{}", id);
        assert_eq!(
            normalize_whitespace(&preview_text(&preview)),
            normalize_whitespace(&export_text(&export)),
            "{}",
            id
        );
    }
}

#[test]
fn test_body_text_appears_in_both() {
    let values = full_record();
    for id in DocumentTypeId::ALL {
        let rendered = render_document(id, &values, &ctx(), &RenderSettings::default());
        let preview = preview_text(&rendered.preview);
        let export = export_text(&rendered.export);
        for segment in rendered.body.segments() {
            assert!(preview.contains(segment), "{}: {:?}", id, segment);
            assert!(export.contains(segment), "{}: {:?}", id, segment);
        }
    }
}

#[test]
fn test_signature_always_on_last_page() {
    let settings = RenderSettings::default();
    for (label, values) in records() {
        for id in DocumentTypeId::ALL {
            let export = render_document(id, &values, &ctx(), &settings).export;
            assert_eq!(
                export.signature_page(),
                Some(export.page_count()),
                "{} / {}",
                id,
                label
            );
        }
    }
}

#[test]
fn test_stamp_only_when_signed() {
    for (label, values) in records() {
        let rendered = render_document(
            DocumentTypeId::AttestationHebergement,
            &values,
            &ctx(),
            &RenderSettings::default(),
        );
        let stamped = export_text(&rendered.export).contains("Signé électroniquement");
        assert_eq!(stamped, label == "signed", "{}", label);
    }
}

#[test]
fn test_serialized_shape() {
    let rendered = render_document(
        DocumentTypeId::AttestationTravail,
        &full_record(),
        &ctx(),
        &RenderSettings::default(),
    );
    let json = serde_json::to_value(&rendered).unwrap();
    assert_eq!(json["preview"]["type"], "document");
    assert_eq!(json["export"]["pages"][0]["number"], 1);
    assert_eq!(json["export"]["letterhead"]["kind"], "organization");
    assert_eq!(json["filename"], "Attestation_Texte_nom.pdf");
}
