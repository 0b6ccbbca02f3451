//! Landing page: rotating hero slides and the latest published posts.

#[cfg(test)]
#[path = "home_test.rs"]
mod home_test;

use content::posts::Category;
use leptos::prelude::*;

use crate::state::admin::AdminState;

struct Slide {
    title: &'static str,
    subtitle: &'static str,
    body: &'static str,
    image: &'static str,
    tone: &'static str,
    cta: Option<(&'static str, &'static str)>,
}

static SLIDES: [Slide; 4] = [
    Slide {
        title: "Welcome to My Portfolio",
        subtitle: "Data Science & Web Development",
        body: "A passionate data scientist and web developer transforming ideas into digital experiences.",
        image: "https://i.postimg.cc/V65vmM15/20250117-153417.jpg",
        tone: "blue",
        cta: Some(("/projects", "View Projects")),
    },
    Slide {
        title: "Featured Projects",
        subtitle: "Recent Work & Innovations",
        body: "Explore my latest projects in machine learning, data visualization, and full-stack web applications.",
        image: "https://images.unsplash.com/photo-1551288049-bebda4e38f71?w=400&h=300&fit=crop",
        tone: "green",
        cta: Some(("/projects", "Browse Projects")),
    },
    Slide {
        title: "Technical Blog",
        subtitle: "Insights & Tutorials",
        body: "Deep dives into data science techniques, web development best practices, and technology insights.",
        image: "https://images.unsplash.com/photo-1488590528505-98d2b5aba04b?w=400&h=300&fit=crop",
        tone: "purple",
        cta: Some(("/blog", "Read the Blog")),
    },
    Slide {
        title: "Let's Connect",
        subtitle: "Ready to Collaborate",
        body: "Interested in working together? Get in touch to discuss your next project or collaboration opportunity.",
        image: "https://images.unsplash.com/photo-1486312338219-ce68d2c6f44d?w=400&h=300&fit=crop",
        tone: "orange",
        cta: Some(("/contact", "Get In Touch")),
    },
];

/// Seconds between automatic slide changes.
#[cfg(feature = "hydrate")]
const AUTOPLAY_SECS: u64 = 5;

/// Index `delta` steps from `current`, wrapping in both directions.
fn step_slide(current: usize, delta: isize, len: usize) -> usize {
    if len == 0 {
        return 0;
    }
    #[allow(clippy::cast_possible_wrap, clippy::cast_sign_loss)]
    let next = (current as isize + delta).rem_euclid(len as isize) as usize;
    next
}

#[component]
pub fn HomePage() -> impl IntoView {
    let admin = expect_context::<RwSignal<AdminState>>();
    let current = RwSignal::new(0_usize);

    #[cfg(feature = "hydrate")]
    {
        let alive = std::sync::Arc::new(std::sync::atomic::AtomicBool::new(true));
        let alive_task = alive.clone();
        leptos::task::spawn_local(async move {
            loop {
                gloo_timers::future::sleep(std::time::Duration::from_secs(AUTOPLAY_SECS)).await;
                if !alive_task.load(std::sync::atomic::Ordering::Relaxed) {
                    break;
                }
                current.update(|i| *i = step_slide(*i, 1, SLIDES.len()));
            }
        });
        on_cleanup(move || alive.store(false, std::sync::atomic::Ordering::Relaxed));
    }

    let latest = move || {
        admin.with(|s| {
            let mut posts = s.posts.published(Category::Blog);
            posts.extend(s.posts.published(Category::Project));
            posts.sort_by(|a, b| b.date.cmp(&a.date));
            posts.truncate(3);
            posts
        })
    };

    view! {
        <div class="home-page">
            {move || {
                let slide = &SLIDES[current.get()];
                view! {
                    <section class={format!("hero hero--{}", slide.tone)}>
                        <div class="hero__text">
                            <span class="hero__subtitle">{slide.subtitle}</span>
                            <h1 class="hero__title">{slide.title}</h1>
                            <p class="hero__body">{slide.body}</p>
                            {slide.cta.map(|(href, label)| view! { <a href=href class="btn btn--primary">{label}</a> })}
                        </div>
                        <img class="hero__image" src={slide.image} alt={slide.title}/>
                    </section>
                }
            }}
            <div class="hero__controls">
                <button class="btn btn--ghost" aria-label="Previous slide" on:click=move |_| current.update(|i| *i = step_slide(*i, -1, SLIDES.len()))>
                    "‹"
                </button>
                {(0..SLIDES.len())
                    .map(|index| {
                        view! {
                            <button
                                class="hero__dot"
                                class:hero__dot--active=move || current.get() == index
                                aria-label={format!("Go to slide {}", index + 1)}
                                on:click=move |_| current.set(index)
                            ></button>
                        }
                    })
                    .collect_view()}
                <button class="btn btn--ghost" aria-label="Next slide" on:click=move |_| current.update(|i| *i = step_slide(*i, 1, SLIDES.len()))>
                    "›"
                </button>
            </div>
            <section class="latest">
                <h2>"Latest Posts"</h2>
                <div class="latest__grid">
                    {move || {
                        latest()
                            .into_iter()
                            .map(|post| {
                                view! {
                                    <article class="latest__card">
                                        {post.image.map(|src| view! { <img src=src alt=""/> })}
                                        <span class="badge">{post.category.as_str()}</span>
                                        <h3>{post.title}</h3>
                                        <time>{post.date.to_string()}</time>
                                    </article>
                                }
                            })
                            .collect_view()
                    }}
                </div>
            </section>
        </div>
    }
}
