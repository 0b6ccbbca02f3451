//! Static public-site content: project catalogue, blog articles and the
//! upcoming-work board.
//!
//! DESIGN
//! ======
//! These lists ship with the build and are never edited at runtime, so they
//! are `'static` slices rather than store entries. Admin-authored posts live
//! in `content::posts` instead.

#[cfg(test)]
#[path = "catalog_test.rs"]
mod catalog_test;

/// Binance Pay id shown on the payment page and in the purchase dialog.
pub const BINANCE_PAY_ID: &str = "508-888-8888";

// =============================================================================
// PROJECTS
// =============================================================================

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ProjectArea {
    DataScience,
    WebDev,
}

impl ProjectArea {
    pub fn id(self) -> &'static str {
        match self {
            Self::DataScience => "data-science",
            Self::WebDev => "web-dev",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ProjectStatus {
    Completed,
    InProgress,
    Upcoming,
}

impl ProjectStatus {
    pub fn label(self) -> &'static str {
        match self {
            Self::Completed => "Completed",
            Self::InProgress => "In Progress",
            Self::Upcoming => "Upcoming",
        }
    }

    /// Modifier for the status badge class.
    pub fn tone(self) -> &'static str {
        match self {
            Self::Completed => "green",
            Self::InProgress => "yellow",
            Self::Upcoming => "blue",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Project {
    pub id: u32,
    pub title: &'static str,
    pub description: &'static str,
    pub tech: &'static [&'static str],
    pub status: ProjectStatus,
    pub area: ProjectArea,
    pub demo_url: Option<&'static str>,
    pub image: &'static str,
    /// Card label such as `$29`.
    pub price: &'static str,
}

/// Project tab filter: `all`, `data-science` or `web-dev`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ProjectFilter {
    #[default]
    All,
    Only(ProjectArea),
}

impl ProjectFilter {
    pub const ALL: [Self; 3] = [Self::All, Self::Only(ProjectArea::DataScience), Self::Only(ProjectArea::WebDev)];

    pub fn id(self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Only(area) => area.id(),
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::All => "All Projects",
            Self::Only(ProjectArea::DataScience) => "Data Science",
            Self::Only(ProjectArea::WebDev) => "Web Development",
        }
    }

    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|f| f.id() == id)
    }

    pub fn matches(self, project: &Project) -> bool {
        match self {
            Self::All => true,
            Self::Only(area) => project.area == area,
        }
    }
}

pub const PROJECTS: &[Project] = &[
    Project {
        id: 1,
        title: "ML Prediction Dashboard",
        description: "Interactive dashboard for machine learning model predictions with real-time data visualization and model performance metrics.",
        tech: &["Python", "Streamlit", "Scikit-learn", "Pandas", "Plotly"],
        status: ProjectStatus::Completed,
        area: ProjectArea::DataScience,
        demo_url: Some("https://demo.example.com"),
        image: "https://images.unsplash.com/photo-1551288049-bebda4e38f71?w=400&h=250&fit=crop",
        price: "$29",
    },
    Project {
        id: 2,
        title: "E-commerce Analytics Platform",
        description: "Full-stack web application with advanced analytics, user behavior tracking, and real-time sales monitoring.",
        tech: &["React", "Node.js", "PostgreSQL", "Redis", "D3.js"],
        status: ProjectStatus::Completed,
        area: ProjectArea::WebDev,
        demo_url: Some("https://demo.example.com"),
        image: "https://images.unsplash.com/photo-1460925895917-afdab827c52f?w=400&h=250&fit=crop",
        price: "$49",
    },
    Project {
        id: 3,
        title: "Data Visualization Suite",
        description: "Comprehensive data visualization tool for complex datasets with statistical analysis and interactive charts.",
        tech: &["D3.js", "Python", "Flask", "SQLite", "Chart.js"],
        status: ProjectStatus::InProgress,
        area: ProjectArea::DataScience,
        demo_url: None,
        image: "https://images.unsplash.com/photo-1551288049-bebda4e38f71?w=400&h=250&fit=crop",
        price: "$39",
    },
    Project {
        id: 4,
        title: "React Component Library",
        description: "Modern, accessible React component library with TypeScript support and comprehensive documentation.",
        tech: &["React", "TypeScript", "Storybook", "Tailwind CSS", "Jest"],
        status: ProjectStatus::InProgress,
        area: ProjectArea::WebDev,
        demo_url: Some("https://demo.example.com"),
        image: "https://images.unsplash.com/photo-1633356122544-f134324a6cee?w=400&h=250&fit=crop",
        price: "$19",
    },
    Project {
        id: 5,
        title: "AI Content Generator",
        description: "AI-powered content generation tool with natural language processing and customizable templates.",
        tech: &["Python", "FastAPI", "OpenAI API", "React", "MongoDB"],
        status: ProjectStatus::Upcoming,
        area: ProjectArea::DataScience,
        demo_url: None,
        image: "https://images.unsplash.com/photo-1677442136019-21780ecad995?w=400&h=250&fit=crop",
        price: "$59",
    },
];

pub fn projects(filter: ProjectFilter) -> Vec<&'static Project> {
    PROJECTS.iter().filter(|p| filter.matches(p)).collect()
}

// =============================================================================
// ARTICLES
// =============================================================================

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Topic {
    DataScience,
    WebDevelopment,
}

impl Topic {
    pub fn label(self) -> &'static str {
        match self {
            Self::DataScience => "Data Science",
            Self::WebDevelopment => "Web Development",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Article {
    pub id: u32,
    pub title: &'static str,
    pub excerpt: &'static str,
    pub topic: Topic,
    pub tags: &'static [&'static str],
    /// `YYYY-MM-DD`.
    pub publish_date: &'static str,
    pub read_time: &'static str,
    pub image: &'static str,
    pub featured: bool,
}

/// Blog filter; labels double as ids (`All`, `Data Science`, `Web Development`).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TopicFilter {
    #[default]
    All,
    Only(Topic),
}

impl TopicFilter {
    pub const ALL: [Self; 3] = [Self::All, Self::Only(Topic::DataScience), Self::Only(Topic::WebDevelopment)];

    pub fn label(self) -> &'static str {
        match self {
            Self::All => "All",
            Self::Only(topic) => topic.label(),
        }
    }

    pub fn matches(self, article: &Article) -> bool {
        match self {
            Self::All => true,
            Self::Only(topic) => article.topic == topic,
        }
    }
}

pub const ARTICLES: &[Article] = &[
    Article {
        id: 1,
        title: "Building a Machine Learning Dashboard with Streamlit",
        excerpt: "A comprehensive guide to creating interactive ML dashboards that showcase model predictions and performance metrics in real-time.",
        topic: Topic::DataScience,
        tags: &["Python", "Streamlit", "Machine Learning", "Data Visualization"],
        publish_date: "2024-01-15",
        read_time: "8 min read",
        image: "https://images.unsplash.com/photo-1551288049-bebda4e38f71?w=600&h=300&fit=crop",
        featured: true,
    },
    Article {
        id: 2,
        title: "React Performance Optimization: Advanced Techniques",
        excerpt: "Deep dive into advanced React performance optimization techniques including memo, useMemo, useCallback, and code splitting strategies.",
        topic: Topic::WebDevelopment,
        tags: &["React", "Performance", "JavaScript", "Optimization"],
        publish_date: "2024-01-10",
        read_time: "12 min read",
        image: "https://images.unsplash.com/photo-1633356122544-f134324a6cee?w=600&h=300&fit=crop",
        featured: false,
    },
    Article {
        id: 3,
        title: "Data Analysis Pipeline with Python and Pandas",
        excerpt: "Step-by-step guide to building robust data analysis pipelines using Python, Pandas, and statistical analysis techniques.",
        topic: Topic::DataScience,
        tags: &["Python", "Pandas", "Data Analysis", "Statistics"],
        publish_date: "2024-01-05",
        read_time: "10 min read",
        image: "https://images.unsplash.com/photo-1460925895917-afdab827c52f?w=600&h=300&fit=crop",
        featured: false,
    },
    Article {
        id: 4,
        title: "Building Scalable APIs with Node.js and Express",
        excerpt: "Learn how to design and implement scalable REST APIs using Node.js, Express, and modern backend development practices.",
        topic: Topic::WebDevelopment,
        tags: &["Node.js", "Express", "API", "Backend"],
        publish_date: "2024-01-01",
        read_time: "15 min read",
        image: "https://images.unsplash.com/photo-1627398242454-45a1465c2479?w=600&h=300&fit=crop",
        featured: false,
    },
    Article {
        id: 5,
        title: "Introduction to Natural Language Processing",
        excerpt: "Getting started with NLP using Python, exploring text preprocessing, sentiment analysis, and machine learning for text data.",
        topic: Topic::DataScience,
        tags: &["NLP", "Python", "Machine Learning", "Text Analysis"],
        publish_date: "2023-12-28",
        read_time: "11 min read",
        image: "https://images.unsplash.com/photo-1677442136019-21780ecad995?w=600&h=300&fit=crop",
        featured: false,
    },
];

pub fn articles(filter: TopicFilter) -> Vec<&'static Article> {
    ARTICLES.iter().filter(|a| filter.matches(a)).collect()
}

// =============================================================================
// UPCOMING
// =============================================================================

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Priority {
    High,
    Medium,
    Low,
}

impl Priority {
    pub fn label(self) -> &'static str {
        match self {
            Self::High => "High",
            Self::Medium => "Medium",
            Self::Low => "Low",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Milestone {
    pub date: &'static str,
    pub note: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Roadmap {
    pub id: u32,
    pub title: &'static str,
    pub description: &'static str,
    /// Percent complete, 0..=100.
    pub progress: u8,
    pub eta: &'static str,
    pub status: &'static str,
    pub technologies: &'static [&'static str],
    pub priority: Priority,
    pub team: &'static [&'static str],
    pub milestones: &'static [Milestone],
}

pub const ROADMAP: &[Roadmap] = &[
    Roadmap {
        id: 1,
        title: "AI-Powered Portfolio Analytics",
        description: "Advanced analytics dashboard for tracking portfolio performance with machine learning insights.",
        progress: 75,
        eta: "March 2024",
        status: "In Progress",
        technologies: &["React", "Python", "TensorFlow", "D3.js"],
        priority: Priority::High,
        team: &["You", "ML Engineer"],
        milestones: &[
            Milestone { date: "2024-01-15", note: "Completed data preprocessing pipeline" },
            Milestone { date: "2024-01-10", note: "Integrated ML model training" },
        ],
    },
    Roadmap {
        id: 2,
        title: "Blockchain Portfolio Tracker",
        description: "Decentralized application for tracking cryptocurrency portfolio with real-time analytics.",
        progress: 45,
        eta: "April 2024",
        status: "In Progress",
        technologies: &["Solidity", "Web3.js", "React", "Node.js"],
        priority: Priority::Medium,
        team: &["You", "Blockchain Dev"],
        milestones: &[
            Milestone { date: "2024-01-12", note: "Smart contract development started" },
            Milestone { date: "2024-01-08", note: "UI mockups completed" },
        ],
    },
    Roadmap {
        id: 3,
        title: "Neural Network Visualizer",
        description: "Interactive tool for visualizing neural network architectures and training processes.",
        progress: 20,
        eta: "May 2024",
        status: "Planning",
        technologies: &["Three.js", "Python", "Flask", "WebGL"],
        priority: Priority::Low,
        team: &["You"],
        milestones: &[
            Milestone { date: "2024-01-05", note: "Research phase completed" },
            Milestone { date: "2024-01-01", note: "Project concept approved" },
        ],
    },
];
