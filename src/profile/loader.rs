//! Loading the profile record from disk

use crate::error::{JobTailorError, Result};
use crate::profile::models::CvMaster;
use log::info;
use std::path::Path;

/// Read and deserialize `cv_master.json`.
pub fn load_cv_master(path: &Path) -> Result<CvMaster> {
    if !path.exists() {
        return Err(JobTailorError::InvalidInput(format!(
            "Profile file does not exist: {}",
            path.display()
        )));
    }

    let content = std::fs::read_to_string(path)?;
    let cv: CvMaster = serde_json::from_str(&content)?;

    if cv.profile.name.trim().is_empty() {
        return Err(JobTailorError::Profile(format!(
            "Profile name is empty in {}",
            path.display()
        )));
    }

    info!(
        "Loaded profile '{}': {} experience entries, {} skills",
        cv.profile.name,
        cv.experience.len(),
        cv.skills.inventory().len()
    );
    Ok(cv)
}

#[cfg(test)]
pub(crate) mod fixtures {
    use crate::profile::models::CvMaster;

    pub const SAMPLE_CV: &str = r#"{
      "meta": { "version": 1 },
      "profile": {
        "name": "Ana Pérez",
        "title": { "es": "Desarrolladora Frontend", "en": "Frontend Developer" },
        "contact": {
          "phone": "+56 9 1234 5678",
          "email": "ana@example.com",
          "links": {
            "linkedin": { "es": "https://linkedin.com/in/ana?locale=es", "en": "https://linkedin.com/in/ana" },
            "github": "https://github.com/ana"
          },
          "location": { "es": "Santiago, Chile", "en": "Santiago, Chile" }
        }
      },
      "summary": {
        "es": ["Desarrolladora frontend con foco en calidad."],
        "en": ["Frontend developer focused on quality."]
      },
      "experience": [
        {
          "company": "Acme",
          "location": { "es": "Remoto", "en": "Remote" },
          "role": { "es": "Desarrolladora Frontend", "en": "Frontend Developer" },
          "start_year": 2021,
          "end_year": 2024,
          "bullets": {
            "es": ["Documenté procesos internos", "Migré vistas a react con typescript", "Mejoré la performance de carga"],
            "en": ["Documented internal processes", "Migrated views to react with typescript", "Improved load performance"]
          },
          "tags": ["frontend"]
        },
        {
          "company": "Globex",
          "location": { "es": "Santiago", "en": "Santiago" },
          "role": { "es": "Practicante", "en": "Intern" },
          "start_year": 2020,
          "end_year": 2021,
          "bullets": { "es": ["Escribí pruebas"], "en": ["Wrote unit testing suites"] }
        }
      ],
      "education": [
        {
          "degree": { "es": "Ingeniería en Informática", "en": "Computer Engineering" },
          "institution": "Universidad de Chile",
          "year": 2020,
          "location": { "es": "Santiago", "en": "Santiago" }
        }
      ],
      "skills": {
        "core": ["HTML", "CSS", "React", "TypeScript"],
        "apis": ["REST API"],
        "tooling": ["Git", "Jest"]
      },
      "languages": [
        { "name": "Español", "level": { "es": "Nativo", "en": "Native" } },
        { "name": "English", "level": { "es": "Avanzado", "en": "Advanced" } }
      ]
    }"#;

    pub fn sample_cv() -> CvMaster {
        serde_json::from_str(SAMPLE_CV).unwrap()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profile::models::Lang;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_load_sample_profile() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(fixtures::SAMPLE_CV.as_bytes()).unwrap();

        let cv = load_cv_master(file.path()).unwrap();
        assert_eq!(cv.profile.name, "Ana Pérez");
        assert_eq!(cv.file_stem(), "Ana_Pérez");
        assert_eq!(cv.experience[0].bullets(Lang::En).len(), 3);
        assert!(cv.experience[1].tags.is_empty());
        assert_eq!(
            cv.skills.inventory(),
            vec!["HTML", "CSS", "React", "TypeScript", "REST API", "Git", "Jest"]
        );
    }

    #[test]
    fn test_missing_file() {
        let result = load_cv_master(Path::new("does/not/exist.json"));
        assert!(matches!(result, Err(JobTailorError::InvalidInput(_))));
    }

    #[test]
    fn test_malformed_json() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(b"{ \"profile\": ").unwrap();

        let result = load_cv_master(file.path());
        assert!(matches!(result, Err(JobTailorError::Serialization(_))));
    }
}
