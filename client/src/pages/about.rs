//! About page: bio, skills and education.

use leptos::prelude::*;

const SKILLS: [(&str, &[&str]); 3] = [
    (
        "Data Science",
        &[
            "Python", "R", "SQL", "Machine Learning", "Deep Learning", "Statistics", "Data Visualization", "Pandas", "NumPy",
            "Scikit-learn", "TensorFlow", "PyTorch", "Jupyter", "Statistical Analysis",
        ],
    ),
    (
        "Web Development",
        &[
            "JavaScript", "TypeScript", "React", "Node.js", "Express.js", "Next.js", "HTML5", "CSS3", "Tailwind CSS", "MongoDB",
            "PostgreSQL", "REST APIs", "GraphQL", "Git", "Docker",
        ],
    ),
    (
        "Tools & Technologies",
        &[
            "VS Code", "Jupyter Notebooks", "Git/GitHub", "Docker", "AWS", "Google Cloud", "Tableau", "Power BI", "Figma",
            "Postman", "Linux", "Bash/Shell", "CI/CD", "Testing",
        ],
    ),
];

struct Education {
    degree: &'static str,
    institution: &'static str,
    period: &'static str,
    status: &'static str,
    description: &'static str,
}

const EDUCATION: [Education; 2] = [
    Education {
        degree: "Bachelor of Science in Data Science",
        institution: "University of Management Technology",
        period: "2022 - Present",
        status: "Currently Pursuing",
        description: "Focusing on machine learning, statistical analysis, and data visualization with hands-on projects in predictive modeling and data mining.",
    },
    Education {
        degree: "Web Development Certification",
        institution: "Tech Academy Online",
        period: "2023",
        status: "Completed",
        description: "Comprehensive full-stack web development program covering modern frameworks, backend technologies, and database management.",
    },
];

#[component]
pub fn AboutPage() -> impl IntoView {
    view! {
        <div class="about-page">
            <section class="about-page__intro">
                <h1>"About Me"</h1>
                <p>
                    "Data scientist and full-stack developer who enjoys turning raw data into insight and insight into "
                    "products people like to use."
                </p>
                <a href="/contact" class="btn btn--primary">"Get In Touch"</a>
            </section>
            <section class="about-page__skills">
                <h2>"Skills"</h2>
                {SKILLS
                    .into_iter()
                    .map(|(group, skills)| {
                        view! {
                            <div class="skill-group">
                                <h3>{group}</h3>
                                <ul class="skill-group__list">
                                    {skills.iter().map(|skill| view! { <li class="badge">{*skill}</li> }).collect_view()}
                                </ul>
                            </div>
                        }
                    })
                    .collect_view()}
            </section>
            <section class="about-page__education">
                <h2>"Education"</h2>
                {EDUCATION
                    .into_iter()
                    .map(|e| {
                        view! {
                            <article class="education">
                                <header>
                                    <h3>{e.degree}</h3>
                                    <span class="badge">{e.status}</span>
                                </header>
                                <p class="education__meta">{format!("{} · {}", e.institution, e.period)}</p>
                                <p>{e.description}</p>
                            </article>
                        }
                    })
                    .collect_view()}
            </section>
        </div>
    }
}
