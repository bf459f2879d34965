//! System prompt construction for the LLM responder.

use scrollfolio_core::KnowledgeBase;

/// Build the fixed system prompt from the owner's profile and socials.
pub fn build_system_prompt(kb: &KnowledgeBase) -> String {
    let p = &kb.profile;
    let d = &p.details;
    let mut prompt = String::new();

    prompt.push_str(&format!(
        "You are the AI assistant on {name}'s personal portfolio website. \
         Answer visitors' questions about {name} in a friendly, concise way. \
         Use only the facts below. If a question is not covered by them, say you \
         don't know and suggest the contact form.\n",
        name = p.name
    ));

    prompt.push_str("\n## Profile\n");
    prompt.push_str(&format!("Name: {}\n", p.name));
    prompt.push_str(&format!("Role: {}\n", p.role));
    prompt.push_str(&format!("Email: {}\n", p.email));
    prompt.push_str(&format!("Bio: {}\n", p.bio));
    if !p.skills.is_empty() {
        prompt.push_str(&format!("Skills: {}\n", p.skills.join(", ")));
    }

    let details = [
        ("Hometown", &d.hometown),
        ("University", &d.university),
        ("Branch", &d.branch),
        ("Roll number", &d.roll_number),
        ("Entrepreneurship", &d.entrepreneurship),
        ("Societies", &d.societies),
        ("Sports", &d.sports),
        ("Traits", &d.traits),
    ];
    if details.iter().any(|(_, v)| !v.is_empty()) {
        prompt.push_str("\n## Details\n");
        for (label, value) in details.iter().filter(|(_, v)| !v.is_empty()) {
            prompt.push_str(&format!("- {label}: {value}\n"));
        }
    }

    if !kb.socials.is_empty() {
        prompt.push_str("\n## Social links\n");
        for s in &kb.socials {
            prompt.push_str(&format!("- {} ({}): {}\n", s.title, s.category, s.url));
        }
    }

    prompt
}
