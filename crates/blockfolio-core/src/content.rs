//! Static content tables.
//!
//! Immutable inputs defined at process start: the ingredient palette, the
//! recipe book, projects, the timeline, the advancement tree, the hotbar
//! and the chat script. The rendering layer reads these; nothing writes
//! them.

use crate::types::{
    AdvancementNode, ArmorSlot, ChatMessage, HotbarItem, Ingredient, Rarity, Recipe, RecipeResult,
    SectionId, StatLine, TimelineEntry,
};

/// Crafting-palette ingredients, grouped by `category`.
pub const INGREDIENTS: &[Ingredient] = &[
    // Languages
    Ingredient { id: "cpp", name: "C++", icon: "\u{2694}\u{fe0f}", lore: &["Sharpness V", "Efficiency IV", "Unbreaking III"], category: "Languages" },
    Ingredient { id: "java", name: "Java", icon: "\u{2615}", lore: &["Efficiency IV", "Unbreaking III", "Mending"], category: "Languages" },
    Ingredient { id: "python", name: "Python", icon: "\u{1f40d}", lore: &["Efficiency V", "Silk Touch", "Fortune III"], category: "Languages" },
    Ingredient { id: "typescript", name: "TypeScript", icon: "\u{1f4d8}", lore: &["Protection IV", "Thorns II", "Swift Sneak"], category: "Languages" },
    Ingredient { id: "go", name: "Go", icon: "\u{1f439}", lore: &["Speed II", "Efficiency III"], category: "Languages" },
    // Frameworks
    Ingredient { id: "react", name: "React", icon: "\u{269b}\u{fe0f}", lore: &["Sharpness III", "Looting II", "Fire Aspect"], category: "Frameworks" },
    Ingredient { id: "nextjs", name: "Next.js", icon: "\u{25b2}", lore: &["Protection III", "Blast Protection IV"], category: "Frameworks" },
    Ingredient { id: "node", name: "Node.js", icon: "\u{1f7e2}", lore: &["Efficiency III", "Unbreaking II"], category: "Frameworks" },
    Ingredient { id: "spring", name: "Spring Boot", icon: "\u{1f343}", lore: &["Protection IV", "Thorns III", "Mending"], category: "Frameworks" },
    // Cloud & DevOps
    Ingredient { id: "aws", name: "AWS", icon: "\u{2601}\u{fe0f}", lore: &["Infinity", "Power V", "Multishot"], category: "Cloud" },
    Ingredient { id: "docker", name: "Docker", icon: "\u{1f433}", lore: &["Efficiency IV", "Aqua Affinity"], category: "Cloud" },
    Ingredient { id: "k8s", name: "Kubernetes", icon: "\u{2638}\u{fe0f}", lore: &["Protection V", "Unbreaking III"], category: "Cloud" },
    Ingredient { id: "terraform", name: "Terraform", icon: "\u{1f3d7}\u{fe0f}", lore: &["Efficiency III", "Fortune II"], category: "Cloud" },
    // Tools
    Ingredient { id: "git", name: "Git", icon: "\u{1f4c2}", lore: &["Loyalty III", "Riptide"], category: "Tools" },
    Ingredient { id: "postgres", name: "PostgreSQL", icon: "\u{1f418}", lore: &["Efficiency IV", "Unbreaking III"], category: "Tools" },
    Ingredient { id: "redis", name: "Redis", icon: "\u{1f534}", lore: &["Speed III", "Quick Charge III"], category: "Tools" },
    Ingredient { id: "linux", name: "Linux", icon: "\u{1f427}", lore: &["Protection IV", "Depth Strider III"], category: "Tools" },
    Ingredient { id: "tensorflow", name: "TensorFlow", icon: "\u{1f9e0}", lore: &["Sharpness IV", "Smite V", "Channeling"], category: "Tools" },
];

/// The recipe book, evaluated in this order by the matcher.
///
/// Requirement sets are assumed unique; if two recipes ever shared one, the
/// first listed here would win.
pub const RECIPES: &[Recipe] = &[
    Recipe {
        id: "r1",
        pattern: ["cpp", "aws", "docker", "", "", "", "", "", ""],
        result: RecipeResult {
            name: "Cloud Systems Engineer",
            icon: "\u{1f48e}",
            rarity: Rarity::Legendary,
            description: "Master of high-performance cloud infrastructure. Forged in the fires of production.",
        },
    },
    Recipe {
        id: "r2",
        pattern: ["react", "nextjs", "node", "", "", "", "", "", ""],
        result: RecipeResult {
            name: "Full-Stack Web Dev",
            icon: "\u{1f310}",
            rarity: Rarity::Epic,
            description: "End-to-end web development. From pixel to server and back again.",
        },
    },
    Recipe {
        id: "r3",
        pattern: ["python", "tensorflow", "", "", "", "", "", "", ""],
        result: RecipeResult {
            name: "ML Engineer",
            icon: "\u{1f916}",
            rarity: Rarity::Epic,
            description: "Trains models that see patterns humans miss. Data is the new diamond ore.",
        },
    },
    Recipe {
        id: "r4",
        pattern: ["java", "spring", "postgres", "", "", "", "", "", ""],
        result: RecipeResult {
            name: "Backend Architect",
            icon: "\u{1f3f0}",
            rarity: Rarity::Legendary,
            description: "Builds fortresses of scalable, enterprise-grade backend systems.",
        },
    },
    Recipe {
        id: "r5",
        pattern: ["docker", "k8s", "terraform", "", "", "", "", "", ""],
        result: RecipeResult {
            name: "DevOps Wizard",
            icon: "\u{1f9d9}",
            rarity: Rarity::Rare,
            description: "Automates everything. Infrastructure bends to their will.",
        },
    },
    Recipe {
        id: "r6",
        pattern: ["typescript", "react", "aws", "", "", "", "", "", ""],
        result: RecipeResult {
            name: "Cloud Full-Stack Dev",
            icon: "\u{26a1}",
            rarity: Rarity::Legendary,
            description: "The ultimate combo. Frontend finesse meets cloud-scale power.",
        },
    },
];

/// Projects shown in the double-chest inventory.
pub const PROJECTS: &[crate::types::Project] = &[
    crate::types::Project {
        id: "p1",
        name: "Data Engine",
        icon: "\u{2699}\u{fe0f}",
        rarity: Rarity::Legendary,
        description: "High-performance data processing engine built in C++ for real-time analytics. Handles millions of events per second.",
        tech_stack: &["C++", "CMake", "gRPC", "Protobuf"],
        github: Some("https://github.com"),
        mob: "Lag Ghast",
        mob_icon: "\u{1f47b}",
        loot: &["Throughput: 2M events/sec", "Latency reduced by 60%", "Zero-downtime processing"],
    },
    crate::types::Project {
        id: "p2",
        name: "Cloud Deploy",
        icon: "\u{2601}\u{fe0f}",
        rarity: Rarity::Epic,
        description: "Automated cloud deployment pipeline with infrastructure-as-code. Multi-region, auto-scaling architecture.",
        tech_stack: &["AWS", "Terraform", "Docker", "Python"],
        github: Some("https://github.com"),
        mob: "Configuration Phantom",
        mob_icon: "\u{1f441}\u{fe0f}",
        loot: &["Deploy time: 30min -> 3min", "99.99% uptime SLA", "Infra-as-code coverage: 100%"],
    },
    crate::types::Project {
        id: "p3",
        name: "Web Portal",
        icon: "\u{1f310}",
        rarity: Rarity::Rare,
        description: "Full-stack web application with real-time collaboration features and responsive design.",
        tech_stack: &["React", "Node.js", "PostgreSQL", "WebSocket"],
        github: Some("https://github.com"),
        mob: "Spaghetti Code Creeper",
        mob_icon: "\u{1f4a5}",
        loot: &["Real-time multi-user editing", "60fps responsive UI", "100% test coverage"],
    },
    crate::types::Project {
        id: "p4",
        name: "ML Pipeline",
        icon: "\u{1f916}",
        rarity: Rarity::Epic,
        description: "End-to-end machine learning pipeline for predictive analytics with automated model training and deployment.",
        tech_stack: &["Python", "TensorFlow", "Kubernetes", "MLflow"],
        github: Some("https://github.com"),
        mob: "Overfitting Enderman",
        mob_icon: "\u{1f7e3}",
        loot: &["Model accuracy: 94%", "Auto-retraining pipeline", "Inference latency < 50ms"],
    },
    crate::types::Project {
        id: "p5",
        name: "Mobile App",
        icon: "\u{1f4f1}",
        rarity: Rarity::Uncommon,
        description: "Cross-platform mobile application with offline-first architecture and native performance.",
        tech_stack: &["Java", "Kotlin", "Firebase", "SQLite"],
        github: Some("https://github.com"),
        mob: "Null Pointer Zombie",
        mob_icon: "\u{1f9df}",
        loot: &["Offline-first architecture", "Cross-platform parity", "4.5-star app store rating"],
    },
    crate::types::Project {
        id: "p6",
        name: "Game Engine",
        icon: "\u{1f3ae}",
        rarity: Rarity::Legendary,
        description: "Custom 2D game engine with physics simulation, particle systems, and sprite rendering.",
        tech_stack: &["C++", "OpenGL", "SDL2", "Lua"],
        github: Some("https://github.com"),
        mob: "Memory Leak Wither",
        mob_icon: "\u{1f480}",
        loot: &["60fps physics sim", "Custom particle engine", "Lua scripting hotreload"],
    },
    crate::types::Project {
        id: "p7",
        name: "API Gateway",
        icon: "\u{1f517}",
        rarity: Rarity::Rare,
        description: "Microservices API gateway with rate limiting, authentication, and request routing.",
        tech_stack: &["Go", "Redis", "Docker", "Nginx"],
        github: Some("https://github.com"),
        mob: "DDoS Blaze",
        mob_icon: "\u{1f525}",
        loot: &["10K req/s rate limiting", "JWT auth with refresh", "Sub-5ms routing"],
    },
    crate::types::Project {
        id: "p8",
        name: "CLI Tool",
        icon: "\u{1f4bb}",
        rarity: Rarity::Uncommon,
        description: "Developer productivity CLI tool for automating repetitive tasks and project scaffolding.",
        tech_stack: &["Rust", "Clap", "Tokio"],
        github: Some("https://github.com"),
        mob: "Boilerplate Slime",
        mob_icon: "\u{1f7e2}",
        loot: &["Scaffold in < 5 sec", "100+ templates", "Async task runner"],
    },
    crate::types::Project {
        id: "p9",
        name: "Dashboard",
        icon: "\u{1f4ca}",
        rarity: Rarity::Common,
        description: "Admin dashboard with real-time data visualization, charts, and monitoring widgets.",
        tech_stack: &["TypeScript", "Next.js", "Chart.js", "Tailwind"],
        github: Some("https://github.com"),
        mob: "Callback Skeleton",
        mob_icon: "\u{1f480}",
        loot: &["Real-time WebSocket charts", "15+ widget types", "Role-based access"],
    },
];

/// Slot count of the double chest that displays [`PROJECTS`].
pub const CHEST_SLOTS: usize = 54;

/// Adventure-log entries, newest first.
pub const TIMELINE: &[TimelineEntry] = &[
    TimelineEntry {
        id: "t1",
        date: "May 2026",
        title: "B.S. Computer Science",
        org: "University",
        description: "Expected graduation with honors. Focus on systems programming, algorithms, and cloud computing.",
        icon: "\u{1f393}",
    },
    TimelineEntry {
        id: "t2",
        date: "Summer 2025",
        title: "Software Engineering Intern",
        org: "Tech Company",
        description: "Built high-performance backend services in C++ and Java. Designed cloud infrastructure using AWS.",
        icon: "\u{1f4bc}",
    },
    TimelineEntry {
        id: "t3",
        date: "2024 - Present",
        title: "Project Lead",
        org: "Open Source",
        description: "Leading development of data processing tools. Managing a team of 5 contributors.",
        icon: "\u{1f527}",
    },
    TimelineEntry {
        id: "t4",
        date: "2023",
        title: "Teaching Assistant",
        org: "CS Department",
        description: "Tutored 200+ students in Data Structures and Algorithms. Created automated grading tools.",
        icon: "\u{1f4da}",
    },
    TimelineEntry {
        id: "t5",
        date: "2022",
        title: "Started Coding Journey",
        org: "Self-taught",
        description: "Wrote my first 'Hello World' in C++. Built my first game in Java. The adventure begins!",
        icon: "\u{2b50}",
    },
];

/// Advancement-tree grid dimensions.
pub const TREE_COLS: u8 = 7;
pub const TREE_ROWS: u8 = 5;

/// The advancement tree, root first. Parents always precede children.
pub const ADVANCEMENTS: &[AdvancementNode] = &[
    AdvancementNode {
        id: "root",
        icon: "\u{1f4e6}",
        title: "Taking Inventory",
        description: "Started B.Tech at SRM Institute of Science and Technology. The journey begins.",
        col: 3,
        row: 0,
        parent_id: None,
        rarity: Rarity::Common,
    },
    AdvancementNode {
        id: "first-code",
        icon: "\u{2328}\u{fe0f}",
        title: "Getting Wood",
        description: "Wrote the first 'Hello World' in C++. A small step that opened infinite possibilities.",
        col: 1,
        row: 1,
        parent_id: Some("root"),
        rarity: Rarity::Uncommon,
    },
    AdvancementNode {
        id: "first-web",
        icon: "\u{1f310}",
        title: "Crafting a New World",
        description: "Built first website with HTML/CSS. Discovered the joy of pixels coming to life.",
        col: 5,
        row: 1,
        parent_id: Some("root"),
        rarity: Rarity::Uncommon,
    },
    AdvancementNode {
        id: "dsa",
        icon: "\u{1f9e9}",
        title: "Sharpening the Blade",
        description: "Mastered Data Structures & Algorithms. Unlocked the ability to think in trees and graphs.",
        col: 0,
        row: 2,
        parent_id: Some("first-code"),
        rarity: Rarity::Rare,
    },
    AdvancementNode {
        id: "java",
        icon: "\u{2615}",
        title: "Brewing Potions",
        description: "Learned Java and Object-Oriented Programming. Efficiency IV, Unbreaking III.",
        col: 2,
        row: 2,
        parent_id: Some("first-code"),
        rarity: Rarity::Rare,
    },
    AdvancementNode {
        id: "veridian",
        icon: "\u{1f33f}",
        title: "The Next Generation",
        description: "Completed the Veridian eco-simulation project. Built an AI-driven environmental analysis tool.",
        col: 4,
        row: 2,
        parent_id: Some("first-web"),
        rarity: Rarity::Epic,
    },
    AdvancementNode {
        id: "cloud",
        icon: "\u{2601}\u{fe0f}",
        title: "Above the Clouds",
        description: "Deployed first application to AWS. Infrastructure-as-code with Terraform & Docker.",
        col: 6,
        row: 2,
        parent_id: Some("first-web"),
        rarity: Rarity::Rare,
    },
    AdvancementNode {
        id: "internship",
        icon: "\u{1f4bc}",
        title: "Into the Nether",
        description: "Landed first software engineering internship. Real-world C++ and Java in production.",
        col: 1,
        row: 3,
        parent_id: Some("java"),
        rarity: Rarity::Epic,
    },
    AdvancementNode {
        id: "fullstack",
        icon: "\u{2694}\u{fe0f}",
        title: "Full-Stack Warrior",
        description: "Combined frontend and backend skills into a full-stack arsenal. React + Node + Cloud.",
        col: 5,
        row: 3,
        parent_id: Some("cloud"),
        rarity: Rarity::Epic,
    },
    AdvancementNode {
        id: "graduation",
        icon: "\u{1f393}",
        title: "The End?",
        description: "Expected B.Tech graduation - May 2026. Not the end, just the beginning of a new dimension.",
        col: 3,
        row: 4,
        parent_id: Some("internship"),
        rarity: Rarity::Legendary,
    },
];

/// The scripted chat, revealed in order and looped forever.
pub const CHAT_SCRIPT: &[ChatMessage] = &[
    ChatMessage { id: 1, sender: "Server", text: "Welcome to Dharmesh's World.", color: "#ffff55", is_system: true },
    ChatMessage { id: 2, sender: "Professor_X", text: "Dharmesh just leveled up in Pattern Recognition!", color: "#55ffff", is_system: false },
    ChatMessage { id: 3, sender: "TechLead_Bob", text: "Incredible work on the Veridian project.", color: "#55ff55", is_system: false },
    ChatMessage { id: 4, sender: "Server", text: "Saving level data...", color: "#ffaa00", is_system: true },
    ChatMessage { id: 5, sender: "Client_Corp", text: "The AWS deployment is running 3x faster now, thanks!", color: "#ff55ff", is_system: false },
    ChatMessage { id: 6, sender: "Mentor_Dan", text: "Your C++ engine's memory management is flawless.", color: "#55ffff", is_system: false },
    ChatMessage { id: 7, sender: "Server", text: "Achievement unlocked: Full-Stack Mastery", color: "#ffff55", is_system: true },
];

/// Hotbar slots: five navigation items plus four empty pad slots.
pub const HOTBAR: &[HotbarItem] = &[
    HotbarItem { id: "home", label: "Home / About", icon: "\u{1f5e1}\u{fe0f}", section: Some(SectionId::About) },
    HotbarItem { id: "projects", label: "Projects", icon: "\u{1f9f0}", section: Some(SectionId::Projects) },
    HotbarItem { id: "skills", label: "Technical Skills", icon: "\u{1f4d6}", section: Some(SectionId::Skills) },
    HotbarItem { id: "experience", label: "Experience", icon: "\u{1f5fa}\u{fe0f}", section: Some(SectionId::Experience) },
    HotbarItem { id: "achievements", label: "Achievements", icon: "\u{1f34e}", section: Some(SectionId::Achievements) },
    HotbarItem { id: "e1", label: "", icon: "", section: None },
    HotbarItem { id: "e2", label: "", icon: "", section: None },
    HotbarItem { id: "e3", label: "", icon: "", section: None },
    HotbarItem { id: "e4", label: "", icon: "", section: None },
];

/// Equipment slots on the character menu.
pub const ARMOR_SLOTS: &[ArmorSlot] = &[
    ArmorSlot { label: "Helmet", value: "Logic & Analysis", icon: "\u{26d1}\u{fe0f}", color: "#4FC3F7" },
    ArmorSlot { label: "Chestplate", value: "Perseverance", icon: "\u{1f6e1}\u{fe0f}", color: "#FFD700" },
    ArmorSlot { label: "Leggings", value: "Creativity", icon: "\u{1f456}", color: "#AB47BC" },
    ArmorSlot { label: "Boots", value: "Adaptability", icon: "\u{1f462}", color: "#66BB6A" },
];

/// Character stat lines.
pub const STATS: &[StatLine] = &[
    StatLine { label: "Attack", value: "C++ / Java / Python" },
    StatLine { label: "Defense", value: "Cloud & DevOps" },
    StatLine { label: "Speed", value: "Fast Learner" },
    StatLine { label: "Luck", value: "Problem Solver" },
];

/// Footer sign links.
pub const FOOTER_LINKS: &[(&str, &str)] = &[
    ("GitHub", "https://github.com/dharmeshpriyadarshi"),
    ("LinkedIn", "http://www.linkedin.com/in/dharmesh-priyadarshi"),
    ("Email", "mailto:dharmeshoff016@gmail.com"),
];

/// Look up an ingredient by id.
pub fn ingredient(id: &str) -> Option<&'static Ingredient> {
    INGREDIENTS.iter().find(|i| i.id == id)
}

/// Look up an advancement node by id.
pub fn advancement(id: &str) -> Option<&'static AdvancementNode> {
    ADVANCEMENTS.iter().find(|n| n.id == id)
}

/// Palette categories in first-appearance order, deduplicated.
pub fn ingredient_categories() -> Vec<&'static str> {
    let mut categories = Vec::new();
    for ing in INGREDIENTS {
        if !categories.contains(&ing.category) {
            categories.push(ing.category);
        }
    }
    categories
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recipe_patterns_reference_known_ingredients() {
        for recipe in RECIPES {
            for id in recipe.required() {
                assert!(
                    ingredient(id).is_some(),
                    "recipe {} references unknown ingredient {}",
                    recipe.id,
                    id
                );
            }
        }
    }

    #[test]
    fn test_recipe_requirement_sets_are_unique() {
        // Match would be ambiguous otherwise; first-listed wins by
        // construction order, but the shipped table must not rely on that.
        let mut normalized: Vec<Vec<&str>> = Vec::new();
        for recipe in RECIPES {
            let mut required: Vec<&str> = recipe.required().collect();
            required.sort_unstable();
            assert!(
                !normalized.contains(&required),
                "duplicate requirement set in recipe {}",
                recipe.id
            );
            normalized.push(required);
        }
    }

    #[test]
    fn test_recipe_requirements_within_grid_capacity() {
        for recipe in RECIPES {
            let count = recipe.required().count();
            assert!((1..=9).contains(&count), "recipe {} has {} items", recipe.id, count);
        }
    }

    #[test]
    fn test_advancement_parents_exist_and_precede_children() {
        for (idx, node) in ADVANCEMENTS.iter().enumerate() {
            if let Some(parent_id) = node.parent_id {
                let parent_idx = ADVANCEMENTS
                    .iter()
                    .position(|n| n.id == parent_id)
                    .unwrap_or_else(|| panic!("node {} has unknown parent {}", node.id, parent_id));
                assert!(parent_idx < idx, "parent of {} listed after it", node.id);
            }
        }
    }

    #[test]
    fn test_advancements_fit_tree_grid() {
        for node in ADVANCEMENTS {
            assert!(node.col < TREE_COLS);
            assert!(node.row < TREE_ROWS);
        }
    }

    #[test]
    fn test_ids_are_unique() {
        for (i, a) in INGREDIENTS.iter().enumerate() {
            assert!(INGREDIENTS.iter().skip(i + 1).all(|b| b.id != a.id));
        }
        for (i, a) in ADVANCEMENTS.iter().enumerate() {
            assert!(ADVANCEMENTS.iter().skip(i + 1).all(|b| b.id != a.id));
        }
        for (i, a) in PROJECTS.iter().enumerate() {
            assert!(PROJECTS.iter().skip(i + 1).all(|b| b.id != a.id));
        }
    }

    #[test]
    fn test_projects_fit_chest() {
        assert!(PROJECTS.len() <= CHEST_SLOTS);
    }

    #[test]
    fn test_hotbar_targets_cover_all_sections() {
        use crate::types::SectionId;
        for section in [
            SectionId::About,
            SectionId::Projects,
            SectionId::Skills,
            SectionId::Experience,
            SectionId::Achievements,
        ] {
            assert!(HOTBAR.iter().any(|item| item.section == Some(section)));
        }
    }

    #[test]
    fn test_ingredient_categories_order() {
        assert_eq!(
            ingredient_categories(),
            vec!["Languages", "Frameworks", "Cloud", "Tools"]
        );
    }
}
