//! Deterministic keyword responder.
//!
//! The input is lower-cased and tested against ordered keyword groups; the
//! first group with a substring hit picks the canned answer. Nothing here
//! can fail.

use scrollfolio_core::KnowledgeBase;
use std::sync::Arc;

/// What a question is about, in matching order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Topic {
    Identity,
    Skills,
    Contact,
    Projects,
    Socials,
    Education,
    Greeting,
}

const GROUPS: &[(Topic, &[&str])] = &[
    (Topic::Identity, &["who", "name", "about", "introduce"]),
    (Topic::Skills, &["skill", "stack", "tech", "language", "code"]),
    (Topic::Contact, &["contact", "email", "reach", "hire", "gmail"]),
    (Topic::Projects, &["project", "work", "portfolio", "build"]),
    (Topic::Socials, &["social", "link", "github", "linkedin", "instagram"]),
    (Topic::Education, &["university", "college", "study", "degree"]),
    (Topic::Greeting, &["hi", "hello", "hey"]),
];

pub struct KeywordResponder {
    kb: Arc<KnowledgeBase>,
    /// "thapar" for "Thapar Institute ...", matched as an education keyword
    university_keyword: Option<String>,
}

impl KeywordResponder {
    pub fn new(kb: Arc<KnowledgeBase>) -> Self {
        let university_keyword = kb.profile.details.university_short_name();
        Self {
            kb,
            university_keyword,
        }
    }

    /// Classify a query. `None` means the fallback answer.
    pub fn classify(&self, query: &str) -> Option<Topic> {
        let q = query.to_lowercase();

        GROUPS.iter().find_map(|(topic, keywords)| {
            let hit = keywords.iter().any(|k| q.contains(k))
                || (*topic == Topic::Education
                    && self
                        .university_keyword
                        .as_deref()
                        .is_some_and(|k| q.contains(k)));
            hit.then_some(*topic)
        })
    }

    /// Answer a single utterance.
    pub fn respond(&self, query: &str) -> String {
        match self.classify(query) {
            Some(topic) => self.answer(topic),
            None => self.fallback(),
        }
    }

    fn answer(&self, topic: Topic) -> String {
        let p = &self.kb.profile;
        match topic {
            Topic::Identity => format!("I am {}, a {}. {}", p.name, p.role, p.bio),
            Topic::Skills => format!("My technical skills include: {}.", p.skills.join(", ")),
            Topic::Contact => format!(
                "You can reach me at: {}. Feel free to send me a message using the \"Let's Talk\" button above!",
                p.email
            ),
            Topic::Projects => {
                let titles: Vec<&str> = self.kb.socials.iter().map(|s| s.title.as_str()).collect();
                if titles.is_empty() {
                    "My latest work is coming soon. Check back later!".to_string()
                } else {
                    format!(
                        "I share my latest work on {}. Check out the \"Connect\" section to follow along!",
                        titles.join(", ")
                    )
                }
            }
            Topic::Socials => {
                let links: Vec<String> = self
                    .kb
                    .socials
                    .iter()
                    .map(|s| format!("{}: {}", s.title, s.url))
                    .collect();
                format!("Here are my social profiles:\n{}", links.join("\n"))
            }
            Topic::Education => {
                let d = &p.details;
                if d.roll_number.is_empty() {
                    format!("I am studying {} at {}.", d.branch, d.university)
                } else {
                    format!(
                        "I am studying {} at {} (Roll No: {}).",
                        d.branch, d.university, d.roll_number
                    )
                }
            }
            Topic::Greeting => format!(
                "Hello! I'm {}'s AI assistant. Ask me about my skills, projects, or how to contact me.",
                first_name(&p.name)
            ),
        }
    }

    /// The fixed reply for unrecognized input.
    pub fn fallback(&self) -> String {
        format!(
            "I'm a simple portfolio assistant tailored to answer questions about {}. \
             Try asking about my 'skills', 'projects', 'contact info', or 'education'.",
            self.kb.profile.name
        )
    }
}

fn first_name(full: &str) -> &str {
    full.split_whitespace().next().unwrap_or(full)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn responder() -> KeywordResponder {
        KeywordResponder::new(Arc::new(KnowledgeBase::builtin()))
    }

    #[test]
    fn skills_reply_lists_every_skill() {
        let r = responder();
        let reply = r.respond("What are your skills?");
        for skill in &KnowledgeBase::builtin().profile.skills {
            assert!(reply.contains(skill.as_str()), "missing {skill} in {reply}");
        }
    }

    #[test]
    fn contact_reply_has_email() {
        let reply = responder().respond("How can I contact you");
        assert!(reply.contains("varunmahajan662@gmail.com"));
    }

    #[test]
    fn unknown_input_gets_fallback() {
        let r = responder();
        assert_eq!(r.respond("qwerty"), r.fallback());
        assert_eq!(r.respond(""), r.fallback());
    }

    #[test]
    fn groups_are_tested_in_order() {
        let r = responder();
        // "name" (identity) wins over "skill"
        assert_eq!(r.classify("name your skills"), Some(Topic::Identity));
        // "tech" (skills) wins over "email" (contact)
        assert_eq!(r.classify("email me your tech"), Some(Topic::Skills));
        assert_eq!(r.classify("Show me your GitHub"), Some(Topic::Socials));
    }

    #[test]
    fn matching_is_case_insensitive() {
        assert_eq!(responder().classify("WHO ARE YOU"), Some(Topic::Identity));
    }

    #[test]
    fn university_short_name_counts_as_education() {
        let r = responder();
        assert_eq!(r.classify("thapar?"), Some(Topic::Education));
        let reply = r.respond("Which college?");
        assert!(reply.contains("Thapar Institute of Engineering & Technology"));
        assert!(reply.contains("1025030117"));
    }

    #[test]
    fn socials_reply_lists_urls() {
        let reply = responder().respond("links please");
        assert!(reply.starts_with("Here are my social profiles:\n"));
        assert!(reply.contains("GitHub: https://github.com/varunmahajan123"));
        assert_eq!(reply.lines().count(), 4);
    }

    #[test]
    fn projects_reply_points_at_socials() {
        let reply = responder().respond("show me a project");
        assert!(reply.contains("Instagram, LinkedIn, GitHub"));
    }

    #[test]
    fn greeting_uses_first_name() {
        let reply = responder().respond("hello");
        assert!(reply.starts_with("Hello! I'm Varun's AI assistant."));
    }

    #[test]
    fn identity_reply_embeds_bio() {
        let kb = KnowledgeBase::builtin();
        let reply = responder().respond("introduce yourself");
        assert!(reply.starts_with("I am Varun Mahajan, a Computer Engineering Student"));
        assert!(reply.ends_with(&kb.profile.bio));
    }
}
