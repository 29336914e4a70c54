//! Built-in feature catalog
//!
//! Used to bootstrap an empty board and as the client's fallback when the
//! initial load fails. Seeds carry community counters but no rating
//! submissions, so their ratings start at 0.

use chrono::{DateTime, Utc};

use crate::types::{Feature, FeatureId};

struct SeedEntry {
    id: &'static str,
    title: &'static str,
    date: &'static str,
    icon: &'static str,
    status: &'static str,
    description: &'static str,
    tldr: &'static str,
    category: &'static str,
    tags: [&'static str; 3],
    upvotes: u64,
    comments: u64,
}

const SEEDS: [SeedEntry; 6] = [
    SeedEntry {
        id: "seed-gpt5",
        title: "GPT-5",
        date: "August 7th",
        icon: "🧠",
        status: "General availability",
        description: "Advanced language model capabilities with enhanced reasoning and improved safety features",
        tldr: "Next-gen AI model with enhanced reasoning and safety",
        category: "AI Models",
        tags: ["GPT", "AI Model", "General AI"],
        upvotes: 856,
        comments: 142,
    },
    SeedEntry {
        id: "seed-copilot-function",
        title: "Copilot function =Copilot()",
        date: "August 18th",
        icon: "📊",
        status: "Released",
        description: "Excel integration for AI-powered functions and data analysis",
        tldr: "AI-powered Excel functions for data analysis",
        category: "Copilot",
        tags: ["Excel", "Functions", "Data Analysis"],
        upvotes: 324,
        comments: 45,
    },
    SeedEntry {
        id: "seed-copilot-studio-m365",
        title: "Copilot Studio Value in M365 Copilot",
        date: "September 1st",
        icon: "🛠️",
        status: "Released",
        description: "Enhanced value delivery through Copilot Studio integration with Microsoft 365",
        tldr: "Build custom AI agents with no-code Copilot Studio",
        category: "Copilot",
        tags: ["Copilot Studio", "No-Code", "M365"],
        upvotes: 267,
        comments: 38,
    },
    SeedEntry {
        id: "seed-copilot-chat-m365",
        title: "Copilot Chat in Microsoft 365 Apps",
        date: "September 15th",
        icon: "💬",
        status: "Released",
        description: "AI-powered chat assistant directly integrated into Word, Excel, PowerPoint, and Outlook for seamless productivity enhancement",
        tldr: "AI chat across all M365 apps for productivity",
        category: "Copilot",
        tags: ["AI Assistant", "Productivity", "M365"],
        upvotes: 247,
        comments: 23,
    },
    SeedEntry {
        id: "seed-human-agent-teams",
        title: "Human-agent collab in Teams",
        date: "September 18th",
        icon: "🤝",
        status: "Released",
        description: "Collaborative AI agent features in Microsoft Teams for enhanced productivity",
        tldr: "AI agents working alongside humans in Teams",
        category: "Teams",
        tags: ["Teams", "Collaboration", "AI Agents"],
        upvotes: 189,
        comments: 31,
    },
    SeedEntry {
        id: "seed-role-based-ai",
        title: "Role-based AI Solutions in M365 Copilot",
        date: "October 10th",
        icon: "🧑‍💼",
        status: "Released",
        description: "Specialized AI solutions tailored for different organizational roles and workflows",
        tldr: "Customized AI solutions for specific job roles",
        category: "Copilot",
        tags: ["Role-based", "Customization", "Enterprise"],
        upvotes: 134,
        comments: 19,
    },
];

/// The built-in catalog, stamped with `now`.
pub fn initial_features(now: DateTime<Utc>) -> Vec<Feature> {
    SEEDS
        .iter()
        .map(|s| {
            let mut f = Feature::new(FeatureId::from(s.id), s.title, now);
            f.date = s.date.to_string();
            f.icon = s.icon.to_string();
            f.status = s.status.to_string();
            f.description = s.description.to_string();
            f.tldr = s.tldr.to_string();
            f.category = s.category.to_string();
            f.tags = s.tags.iter().map(|t| t.to_string()).collect();
            f.upvotes = s.upvotes;
            f.comments = s.comments;
            f
        })
        .collect()
}
