//! Document-specific field groups

use attestkit_model::{
    Agreement, Civility, DocumentTypeId, FieldName, FieldSection, FieldSpec, FieldValues,
};

use super::birth_date_label;

/// Marital status values that reveal the union date
pub(crate) fn union_date_label(status: Option<&str>) -> Option<&'static str> {
    match status? {
        "Marié(e)" => Some("Date du mariage"),
        "Pacsé(e)" => Some("Date du PACS"),
        _ => None,
    }
}

fn group(title: &'static str) -> FieldSection {
    FieldSection::Specific(title)
}

fn marital_fields(values: &FieldValues, section: FieldSection) -> Vec<FieldSpec> {
    let mut specs = vec![
        FieldSpec::new(FieldName::SituationFamiliale, "Situation familiale", section).required(),
    ];
    if let Some(label) = union_date_label(values.get(FieldName::SituationFamiliale)) {
        specs.push(FieldSpec::new(FieldName::DateMariage, label, section).required());
    }
    specs
}

fn beneficiary_fields(section: FieldSection) -> Vec<FieldSpec> {
    vec![
        FieldSpec::new(FieldName::BeneficiaireNom, "Nom", section).required(),
        FieldSpec::new(FieldName::BeneficiairePrenom, "Prénom", section).required(),
        FieldSpec::new(FieldName::BeneficiaireDateNaissance, "Date de naissance", section),
        FieldSpec::new(FieldName::LienParente, "Lien de parenté", section)
            .with_placeholder("Ex : frère, nièce, ami"),
    ]
}

fn descriptor_fields(
    section: FieldSection,
    kind: FieldName,
    nom: FieldName,
    prenom: FieldName,
) -> Vec<FieldSpec> {
    vec![
        FieldSpec::new(kind, "Type de document", section).required(),
        FieldSpec::new(nom, "Nom tel qu'il figure sur le document", section).required(),
        FieldSpec::new(prenom, "Prénom(s) tel(s) qu'il(s) figure(nt) sur le document", section)
            .required(),
    ]
}

/// Groups between the identity section and the trailing fields
pub(super) fn document_fields(id: DocumentTypeId, values: &FieldValues) -> Vec<FieldSpec> {
    use DocumentTypeId::*;
    match id {
        // Prefecture
        AttestationPriseEnCharge => {
            let mut specs = beneficiary_fields(group("Personne prise en charge"));
            specs.push(
                FieldSpec::new(
                    FieldName::MontantMensuel,
                    "Montant mensuel de l'aide (€)",
                    group("Engagement"),
                )
                .with_placeholder("Ex : 600"),
            );
            specs
        }
        AttestationConcubinage => {
            let section = group("Second déclarant");
            let partner = Agreement(
                values
                    .get(FieldName::PartnerCivility)
                    .and_then(Civility::parse),
            );
            vec![
                FieldSpec::new(FieldName::PartnerCivility, "Civilité", section).required(),
                FieldSpec::new(FieldName::PartnerNom, "Nom", section).required(),
                FieldSpec::new(FieldName::PartnerPrenom, "Prénom", section).required(),
                FieldSpec::new(FieldName::PartnerDateNaissance, birth_date_label(partner), section)
                    .required(),
                FieldSpec::new(FieldName::PartnerLieuNaissance, "Lieu de naissance", section)
                    .required(),
            ]
        }
        AttestationConcordance => {
            let mut specs = descriptor_fields(
                group("Premier document"),
                FieldName::Doc1Type,
                FieldName::Doc1Nom,
                FieldName::Doc1Prenom,
            );
            specs.extend(descriptor_fields(
                group("Second document"),
                FieldName::Doc2Type,
                FieldName::Doc2Nom,
                FieldName::Doc2Prenom,
            ));
            specs
        }
        AttestationNonPolygamie => marital_fields(values, group("Situation matrimoniale")),
        AttestationRessources => {
            let section = group("Ressources");
            vec![
                FieldSpec::new(FieldName::MontantMensuel, "Ressources mensuelles (€)", section)
                    .required(),
                FieldSpec::new(FieldName::SourceRevenus, "Origine des ressources", section)
                    .required()
                    .with_placeholder("Ex : salaire, pension, allocations"),
            ]
        }

        // Emploi
        AttestationTravail => {
            let section = group("Emploi");
            vec![
                FieldSpec::new(FieldName::Poste, "Poste occupé", section).required(),
                FieldSpec::new(FieldName::TypeContrat, "Type de contrat", section).required(),
                FieldSpec::new(FieldName::TempsTravail, "Temps de travail", section),
            ]
        }
        AttestationSalaire => {
            let section = group("Rémunération");
            vec![
                FieldSpec::new(FieldName::Poste, "Poste occupé", section).required(),
                FieldSpec::new(FieldName::SalaryGross, "Salaire brut mensuel (€)", section)
                    .required(),
                FieldSpec::new(FieldName::SalaryNet, "Salaire net mensuel (€)", section)
                    .required(),
            ]
        }
        CertificatTravail => {
            let section = group("Emploi");
            vec![
                FieldSpec::new(FieldName::Poste, "Dernier poste occupé", section).required(),
                FieldSpec::new(FieldName::TypeContrat, "Type de contrat", section),
            ]
        }
        PromesseEmbauche => {
            let section = group("Poste proposé");
            vec![
                FieldSpec::new(FieldName::Poste, "Intitulé du poste", section).required(),
                FieldSpec::new(FieldName::TypeContrat, "Type de contrat", section).required(),
                FieldSpec::new(FieldName::TempsTravail, "Temps de travail", section),
                FieldSpec::new(
                    FieldName::SalaryGross,
                    "Rémunération brute mensuelle (€)",
                    section,
                ),
            ]
        }
        AttestationStage => {
            let section = group("Stage");
            vec![
                FieldSpec::new(FieldName::Formation, "Formation suivie", section).required(),
                FieldSpec::new(FieldName::Etablissement, "Établissement d'enseignement", section),
                FieldSpec::new(FieldName::Poste, "Service ou missions", section),
            ]
        }

        // Personnel
        AttestationSurHonneur => vec![FieldSpec::new(
            FieldName::DeclarationText,
            "Objet de la déclaration",
            group("Déclaration"),
        )
        .required()
        .with_placeholder("Ex : ne pas avoir perçu d'aide au logement en 2024")],
        AttestationTemoin => {
            let section = group("Témoignage");
            vec![
                FieldSpec::new(FieldName::LienTemoin, "Lien avec les parties", section)
                    .with_placeholder("Ex : voisin, collègue, aucun"),
                FieldSpec::new(FieldName::FaitsDate, "Date des faits", section).required(),
                FieldSpec::new(FieldName::FaitsLieu, "Lieu des faits", section).required(),
                FieldSpec::new(FieldName::FaitsDescription, "Description des faits", section)
                    .required(),
            ]
        }
        Procuration => vec![
            FieldSpec::new(FieldName::MandataireNom, "Nom du mandataire", group("Mandataire"))
                .required(),
            FieldSpec::new(
                FieldName::MandatairePrenom,
                "Prénom du mandataire",
                group("Mandataire"),
            )
            .required(),
            FieldSpec::new(
                FieldName::ObjetProcuration,
                "Démarches confiées",
                group("Objet de la procuration"),
            )
            .required()
            .with_placeholder("Ex : retirer un colis recommandé à mon nom"),
        ],
        AttestationCelibat | AttestationNonCondamnation => Vec::new(),
        DeclarationPerte => {
            let section = group("Document perdu");
            vec![
                FieldSpec::new(FieldName::DocumentPerdu, "Document perdu", section).required(),
                FieldSpec::new(FieldName::DatePerte, "Date de la perte", section).required(),
                FieldSpec::new(FieldName::LieuPerte, "Lieu de la perte", section),
            ]
        }
        AttestationSituationFamiliale => marital_fields(values, group("Situation familiale")),

        // Education
        CertificatScolarite => {
            let section = group("Scolarité");
            vec![
                FieldSpec::new(FieldName::Etablissement, "Établissement", section).required(),
                FieldSpec::new(FieldName::Classe, "Classe ou niveau", section).required(),
                FieldSpec::new(FieldName::AnneeScolaire, "Année scolaire", section)
                    .required()
                    .with_placeholder("Ex : 2024-2025"),
            ]
        }
        AttestationReussite => {
            let section = group("Examen");
            vec![
                FieldSpec::new(FieldName::Etablissement, "Établissement", section).required(),
                FieldSpec::new(FieldName::Diplome, "Diplôme ou examen", section).required(),
                FieldSpec::new(FieldName::Mention, "Mention", section),
                FieldSpec::new(FieldName::SessionExamen, "Session", section)
                    .with_placeholder("Ex : juin 2024"),
                FieldSpec::new(FieldName::ExamList, "Épreuves réussies", section)
                    .with_placeholder("Une épreuve par ligne"),
            ]
        }
        AttestationAssiduite => {
            let section = group("Formation");
            vec![
                FieldSpec::new(FieldName::Etablissement, "Établissement", section).required(),
                FieldSpec::new(FieldName::Formation, "Formation", section).required(),
                FieldSpec::new(FieldName::TauxAssiduite, "Taux d'assiduité (%)", section),
            ]
        }
        AttestationInscription => {
            let section = group("Inscription");
            vec![
                FieldSpec::new(FieldName::Etablissement, "Établissement", section).required(),
                FieldSpec::new(FieldName::Formation, "Formation", section).required(),
                FieldSpec::new(
                    FieldName::AnneeScolaire,
                    "Année universitaire ou scolaire",
                    section,
                )
                .required()
                .with_placeholder("Ex : 2024-2025"),
            ]
        }

        // Logement
        AttestationHebergement => beneficiary_fields(group("Personne hébergée")),
        QuittanceLoyer => {
            let section = group("Loyer");
            vec![
                FieldSpec::new(FieldName::RentPeriod, "Période concernée", section)
                    .required()
                    .with_placeholder("Ex : mars 2024"),
                FieldSpec::new(FieldName::RentAmount, "Loyer hors charges (€)", section)
                    .required(),
                FieldSpec::new(FieldName::ChargesAmount, "Charges (€)", section),
                FieldSpec::new(FieldName::PaymentDate, "Date de paiement", section),
            ]
        }
        JustificatifDomicile => Vec::new(),
        AttestationLoyerAJour => {
            let section = group("Loyer");
            vec![
                FieldSpec::new(FieldName::RentAmount, "Loyer mensuel hors charges (€)", section)
                    .required(),
                FieldSpec::new(FieldName::ChargesAmount, "Charges mensuelles (€)", section),
            ]
        }
    }
}
