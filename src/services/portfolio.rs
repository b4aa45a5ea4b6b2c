//! Curated project store
//!
//! In-process document store for the hand-picked portfolio projects,
//! seeded at startup. The backing document database is an external
//! collaborator; this keeps its minimal interface (list, ordered).

use crate::models::CuratedProject;

pub struct PortfolioStore {
    projects: Vec<CuratedProject>,
}

impl PortfolioStore {
    /// Store seeded with the sample portfolio projects
    pub fn seeded() -> Self {
        Self {
            projects: seed_projects(),
        }
    }

    /// All curated projects, featured first, then by display order
    pub fn list(&self) -> Vec<CuratedProject> {
        let mut projects = self.projects.clone();
        projects.sort_by(|a, b| b.featured.cmp(&a.featured).then(a.order.cmp(&b.order)));
        projects
    }
}

fn project(
    title: &str,
    description: &str,
    tech_stack: &[&str],
    slug: &str,
    featured: bool,
    order: u32,
) -> CuratedProject {
    CuratedProject {
        title: title.to_string(),
        description: description.to_string(),
        tech_stack: tech_stack.iter().map(|s| s.to_string()).collect(),
        image: format!("https://via.placeholder.com/600x400?text={}", slug),
        github: format!("https://github.com/R123achit/{}", slug.to_lowercase()),
        live: String::new(),
        featured,
        order,
    }
}

fn seed_projects() -> Vec<CuratedProject> {
    vec![
        project(
            "E-Commerce Platform",
            "Full-stack e-commerce application with user authentication, product \
             management, shopping cart, and payment integration using Stripe.",
            &["React", "Node.js", "MongoDB", "Express", "Stripe", "TailwindCSS"],
            "E-Commerce+Platform",
            true,
            1,
        ),
        project(
            "Social Media Dashboard",
            "Analytics dashboard for social media metrics with real-time data \
             visualization, charts, and comprehensive reporting features.",
            &["React", "TypeScript", "Tailwind CSS", "Chart.js", "Redux"],
            "Social+Media+Dashboard",
            true,
            2,
        ),
        project(
            "Task Management App",
            "Collaborative task management tool with drag-and-drop functionality, \
             team features, real-time updates, and project tracking.",
            &["React", "Redux", "Node.js", "PostgreSQL", "Socket.io"],
            "Task+Management+App",
            true,
            3,
        ),
        project(
            "Weather Forecast App",
            "Real-time weather application with location-based forecasts, \
             interactive maps, and 7-day weather predictions.",
            &["React", "OpenWeather API", "Tailwind CSS", "Mapbox"],
            "Weather+Forecast+App",
            false,
            4,
        ),
        project(
            "Blog CMS",
            "Content management system for blogs with rich text editor, SEO \
             optimization, image uploads, and user management.",
            &["Next.js", "MongoDB", "TailwindCSS", "NextAuth", "Cloudinary"],
            "Blog+CMS",
            false,
            5,
        ),
        project(
            "Fitness Tracker",
            "Personal fitness tracking application with workout plans, progress \
             monitoring, calorie tracking, and achievement system.",
            &["React Native", "Firebase", "Redux", "Chart.js"],
            "Fitness+Tracker",
            false,
            6,
        ),
    ]
}
