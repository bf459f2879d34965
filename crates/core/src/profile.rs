//! The knowledge store: static facts about the site owner.
//!
//! Built once at process start and never mutated. The chat responders and
//! the `/api/profile` endpoint read from the same [`KnowledgeBase`].

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Everything the site knows about its owner.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KnowledgeBase {
    pub profile: OwnerProfile,

    /// Ordered social links, rendered as the showcase grid
    #[serde(default)]
    pub socials: Vec<SocialLink>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OwnerProfile {
    pub name: String,
    pub role: String,
    pub bio: String,
    pub email: String,

    /// Ordered skill list
    #[serde(default)]
    pub skills: Vec<String>,

    #[serde(default)]
    pub details: ProfileDetails,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProfileDetails {
    pub hometown: String,
    pub university: String,
    pub branch: String,
    pub roll_number: String,
    pub entrepreneurship: String,
    pub societies: String,
    pub sports: String,
    pub traits: String,
}

impl ProfileDetails {
    /// Lower-cased first word of the university name ("thapar").
    pub fn university_short_name(&self) -> Option<String> {
        self.university
            .split_whitespace()
            .next()
            .map(str::to_lowercase)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SocialLink {
    pub id: String,
    pub title: String,
    pub category: String,
    #[serde(default)]
    pub description: String,
    pub url: String,

    /// Icon reference, relative to the site root
    pub image: String,

    /// Gradient color token used by the card
    pub color: String,
}

impl KnowledgeBase {
    /// The profile compiled into the binary.
    pub fn builtin() -> Self {
        Self {
            profile: OwnerProfile {
                name: "Varun Mahajan".into(),
                role: "Computer Engineering Student @ Thapar University".into(),
                bio: "Varun Mahajan is a Computer Engineering (COE) student at Thapar Institute of \
                      Engineering & Technology, combining technology, creativity, and \
                      entrepreneurship. He has a strong willingness to learn and grow, with \
                      strengths in event management, content creation, and marketing. Currently \
                      exploring programming fundamentals (C, C++, Data Structures) and Web \
                      Development (HTML, Learning CSS)."
                    .into(),
                email: "varunmahajan662@gmail.com".into(),
                skills: vec![
                    "C (Basic)".into(),
                    "C++ (DS & Algo Beginner)".into(),
                    "HTML".into(),
                    "CSS (Learning)".into(),
                    "Event Management".into(),
                    "Content Creation".into(),
                    "Marketing".into(),
                ],
                details: ProfileDetails {
                    hometown: "Amritsar, Punjab".into(),
                    university: "Thapar Institute of Engineering & Technology".into(),
                    branch: "Computer Engineering (COE)".into(),
                    roll_number: "1025030117".into(),
                    entrepreneurship: "Working on 'Memora' - a concept for remembering important \
                                       dates and gifting solutions."
                        .into(),
                    societies: "Shortlisted/Part of: CCS, Enactus, LEAD, Toastmasters, Gene \
                                Society, IETE, Thapar Venture Club, ARC, URJA, AIESEC, TICC, TSC."
                        .into(),
                    sports: "Football (Inter-house/Inter-school competitions)".into(),
                    traits: "Curious, Adaptable, Creative, Team-oriented, Honest about skill level."
                        .into(),
                },
            },
            socials: vec![
                SocialLink {
                    id: "instagram".into(),
                    title: "Instagram".into(),
                    category: "Visuals".into(),
                    description: String::new(),
                    url: "https://www.instagram.com/varunverse_vv/".into(),
                    image: "/images/insta.png".into(),
                    color: "from-pink-500 via-red-500 to-yellow-500".into(),
                },
                SocialLink {
                    id: "linkedin".into(),
                    title: "LinkedIn".into(),
                    category: "Network".into(),
                    description: String::new(),
                    url: "https://www.linkedin.com/in/varun-mahajan786/".into(),
                    image: "/images/linkdin.png".into(),
                    color: "from-blue-600 to-cyan-500".into(),
                },
                SocialLink {
                    id: "github".into(),
                    title: "GitHub".into(),
                    category: "Code".into(),
                    description: String::new(),
                    url: "https://github.com/varunmahajan123".into(),
                    image: "/images/git.png".into(),
                    color: "from-white to-gray-400".into(),
                },
            ],
        }
    }

    /// Load a knowledge base from a `.toml` or `.json` file.
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| Error::Config {
            message: format!("failed to read profile {}: {e}", path.display()),
        })?;

        let is_json = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

        let kb: Self = if is_json {
            serde_json::from_str(&content)?
        } else {
            toml::from_str(&content).map_err(|e| Error::Config {
                message: format!("failed to parse profile {}: {e}", path.display()),
            })?
        };

        tracing::info!(
            path = %path.display(),
            name = %kb.profile.name,
            socials = kb.socials.len(),
            "Loaded owner profile"
        );
        Ok(kb)
    }

    /// Load from `path` when given, otherwise use [`KnowledgeBase::builtin`].
    pub fn load_or_builtin(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load_from(path),
            None => Ok(Self::builtin()),
        }
    }
}

impl Default for KnowledgeBase {
    fn default() -> Self {
        Self::builtin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn builtin_profile_has_socials_in_order() {
        let kb = KnowledgeBase::builtin();
        let ids: Vec<&str> = kb.socials.iter().map(|s| s.id.as_str()).collect();
        assert_eq!(ids, ["instagram", "linkedin", "github"]);
        assert_eq!(kb.profile.skills.len(), 7);
    }

    #[test]
    fn university_short_name_is_first_word() {
        let kb = KnowledgeBase::builtin();
        assert_eq!(
            kb.profile.details.university_short_name().as_deref(),
            Some("thapar")
        );
        assert_eq!(ProfileDetails::default().university_short_name(), None);
    }

    #[test]
    fn details_serialize_camel_case() {
        let json = serde_json::to_string(&KnowledgeBase::builtin()).unwrap();
        assert!(json.contains("rollNumber"));
    }

    #[test]
    fn load_profile_from_toml() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        write!(
            file,
            r#"
[profile]
name = "Ada"
role = "Engineer"
bio = "Writes programs."
email = "ada@example.com"
skills = ["Rust", "Math"]

[profile.details]
university = "Cambridge University"

[[socials]]
id = "github"
title = "GitHub"
category = "Code"
url = "https://github.com/ada"
image = "/images/git.png"
color = "from-white to-gray-400"
"#
        )
        .unwrap();

        let kb = KnowledgeBase::load_from(file.path()).unwrap();
        assert_eq!(kb.profile.name, "Ada");
        assert_eq!(kb.profile.skills, ["Rust", "Math"]);
        assert_eq!(kb.profile.details.university_short_name().as_deref(), Some("cambridge"));
        assert_eq!(kb.socials.len(), 1);
    }

    #[test]
    fn load_profile_from_json() {
        let mut file = tempfile::Builder::new().suffix(".json").tempfile().unwrap();
        let kb = KnowledgeBase::builtin();
        write!(file, "{}", serde_json::to_string(&kb).unwrap()).unwrap();
        assert_eq!(KnowledgeBase::load_from(file.path()).unwrap(), kb);
    }

    #[test]
    fn missing_profile_file_is_a_config_error() {
        let err = KnowledgeBase::load_from(Path::new("/nonexistent/profile.toml")).unwrap_err();
        assert!(matches!(err, Error::Config { .. }));
    }

    #[test]
    fn no_path_means_builtin() {
        assert_eq!(KnowledgeBase::load_or_builtin(None).unwrap(), KnowledgeBase::builtin());
    }
}
