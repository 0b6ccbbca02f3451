//! Blog page: featured article, topic filter and admin-published posts.

use content::posts::Category;
use leptos::prelude::*;

use crate::catalog::{ARTICLES, Article, TopicFilter, articles};
use crate::state::admin::AdminState;

fn article_card(article: &'static Article) -> impl IntoView {
    view! {
        <article class="article-card" class:article-card--featured={article.featured}>
            <img class="article-card__image" src={article.image} alt={article.title}/>
            <div class="article-card__body">
                <div class="article-card__meta">
                    <span class="badge">{article.topic.label()}</span>
                    <time>{article.publish_date}</time>
                    <span>{article.read_time}</span>
                </div>
                <h3>{article.title}</h3>
                <p>{article.excerpt}</p>
                <ul class="article-card__tags">
                    {article.tags.iter().map(|t| view! { <li class="badge">{*t}</li> }).collect_view()}
                </ul>
            </div>
        </article>
    }
}

#[component]
pub fn BlogPage() -> impl IntoView {
    let admin = expect_context::<RwSignal<AdminState>>();
    let filter = RwSignal::new(TopicFilter::All);

    let featured = ARTICLES.iter().find(|a| a.featured);
    let posts = move || admin.with(|s| s.posts.published(Category::Blog));

    view! {
        <div class="blog-page">
            <h1>"Technical Blog"</h1>
            <p class="blog-page__lead">
                "Insights, tutorials, and deep dives into data science, web development, and the intersection of "
                "technology and innovation."
            </p>
            {featured.map(|a| view! { <section class="blog-page__featured">{article_card(a)}</section> })}
            <div class="segmented">
                {TopicFilter::ALL
                    .into_iter()
                    .map(|f| {
                        view! {
                            <button
                                class="segmented__item"
                                class:segmented__item--active=move || filter.get() == f
                                on:click=move |_| filter.set(f)
                            >
                                {f.label()}
                            </button>
                        }
                    })
                    .collect_view()}
            </div>
            <div class="article-grid">
                {move || articles(filter.get()).into_iter().map(article_card).collect_view()}
            </div>
            <section class="blog-page__posts">
                <h2>"From the Editor"</h2>
                {move || {
                    let list = posts();
                    if list.is_empty() {
                        return view! { <p>"Nothing published yet."</p> }.into_any();
                    }
                    list.into_iter()
                        .map(|post| {
                            view! {
                                <article class="editor-post">
                                    {post.image.map(|src| view! { <img src=src alt=""/> })}
                                    <h3>{post.title}</h3>
                                    <time>{post.date.to_string()}</time>
                                    <p>{post.content}</p>
                                </article>
                            }
                        })
                        .collect_view()
                        .into_any()
                }}
            </section>
        </div>
    }
}
