//! Static portfolio copy
//!
//! Everything the renderer shows that is not interactive state lives here.

use crate::types::{Content, Link, Project, ProjectId, SkillCategory};

/// The portfolio content compiled into the binary
pub static CONTENT: Content = Content {
    name: "fidoeth",
    tagline: "growth & product",
    headline: "gtm, growth, crypto.",
    about: &[
        "i try things people haven't and tell stories people remember.",
        "every product has a narrative. i find the one that lands.",
        "i've built from zero. raised capital. shipped fast. scaled audiences.",
        "if it's complex, i make it make sense.",
    ],
    skills: &[
        SkillCategory {
            name: "product & pm",
            skills: &[
                "Jira",
                "Linear",
                "Notion",
                "Figma",
                "Spec Writing",
                "UX Flow Design",
            ],
        },
        SkillCategory {
            name: "crypto / web3",
            skills: &[
                "Etherscan",
                "Solscan",
                "Dune",
                "AMM/LP Mgmt",
                "Alchemy",
                "Helius",
            ],
        },
        SkillCategory {
            name: "ai / creative",
            skills: &[
                "OpenAI Suite",
                "Claude Code",
                "Midjourney",
                "Photoshop",
                "Illustrator",
                "Blender",
            ],
        },
    ],
    projects: &[
        Project {
            id: ProjectId("sukuri"),
            title: "sukuri protocol",
            period: "feb 2023 – mar 2024",
            role: "founder / product lead",
            summary: "onchain subscriptions. 17k+ users. $500k raised.",
            details: &[
                "shipped a revenue-generating mvp with early recurring revenue.",
                "selected for near horizon accelerator. raised $500k pre-seed.",
                "owned product positioning for an onchain subscription platform.",
                "translated smart accounts and account abstraction into messaging non-crypto users actually understood.",
                "designed end-to-end flows for subscription creation, settlement, and merchant onboarding.",
            ],
            tech: &["smart accounts", "account abstraction", "subscriptions"],
        },
        Project {
            id: ProjectId("frame"),
            title: "frame",
            period: "feb 2024 – jul 2024",
            role: "founder / product owner",
            summary: "first token on farcaster frames. $20m mc. 36 hours to ship.",
            details: &[
                "led product and marketing for the first token distributed via farcaster frames.",
                "drove rapid adoption—$20m market cap, $3m+ aum.",
                "concept to mvp in 36 hours. optimized messaging and proprietary ux.",
                "designed creator-facing distribution using uni-v3 lp positions.",
                "activated growth channels at eth denver and nft nyc.",
            ],
            tech: &["farcaster frames", "uni-v3 lp", "creator monetization"],
        },
        Project {
            id: ProjectId("floppa"),
            title: "floppa",
            period: "mar 2024 – present",
            role: "founder / product & growth lead",
            summary: "50k+ followers. hundreds of millions of impressions. $100k web2→onchain.",
            details: &[
                "scaled project-owned socials to 50k+ followers.",
                "hundreds of millions of monthly impressions across owned and partner channels.",
                "enabled creator-driven capital formation—nearly $100k from web2 into the token.",
                "worked directly with creators (20m+ combined followers) on content and monetization.",
                "balanced onchain mechanics, incentives, and cultural relevance to sustain engagement.",
            ],
            tech: &["social growth", "creator economy", "token design"],
        },
    ],
    contacts: &[
        Link {
            label: "x/twitter",
            url: "https://x.com/fidoeth",
        },
        Link {
            label: "farcaster",
            url: "https://farcaster.xyz/fido",
        },
    ],
};

/// Shorthand for the compiled-in content
pub fn portfolio() -> &'static Content {
    &CONTENT
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_project_ids_are_unique() {
        let ids: HashSet<_> = CONTENT.projects.iter().map(|p| p.id).collect();
        assert_eq!(ids.len(), CONTENT.projects.len());
    }

    #[test]
    fn test_every_project_has_five_details() {
        for project in CONTENT.projects {
            assert_eq!(project.details.len(), 5, "{}", project.id);
            assert_eq!(project.tech.len(), 3, "{}", project.id);
        }
    }

    #[test]
    fn test_project_lookup() {
        assert_eq!(CONTENT.project("frame").unwrap().title, "frame");
        assert!(CONTENT.project("missing").is_none());
        assert_eq!(CONTENT.project_index(ProjectId("floppa")), Some(2));
    }

    #[test]
    fn test_skill_categories() {
        assert_eq!(CONTENT.skills.len(), 3);
        assert!(CONTENT.skills.iter().all(|c| c.skills.len() == 6));
    }

    #[test]
    fn test_two_contact_links() {
        assert_eq!(CONTENT.contacts.len(), 2);
        assert!(CONTENT.contacts.iter().all(|l| l.url.starts_with("https://")));
    }
}
