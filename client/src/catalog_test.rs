use content::payments::parse_amount;

use super::*;

#[test]
fn project_filter_ids_round_trip() {
    for filter in ProjectFilter::ALL {
        assert_eq!(ProjectFilter::from_id(filter.id()), Some(filter));
    }
    assert_eq!(ProjectFilter::from_id("mobile"), None);
}

#[test]
fn project_filter_splits_catalogue() {
    assert_eq!(projects(ProjectFilter::All).len(), 5);
    let data: Vec<u32> = projects(ProjectFilter::Only(ProjectArea::DataScience)).iter().map(|p| p.id).collect();
    assert_eq!(data, vec![1, 3, 5]);
    assert_eq!(projects(ProjectFilter::Only(ProjectArea::WebDev)).len(), 2);
}

#[test]
fn every_project_price_parses() {
    for project in PROJECTS {
        assert!(parse_amount(project.price).is_ok(), "{}", project.price);
    }
}

#[test]
fn topic_filter_uses_display_labels() {
    let labels: Vec<&str> = TopicFilter::ALL.iter().map(|f| f.label()).collect();
    assert_eq!(labels, vec!["All", "Data Science", "Web Development"]);
    assert_eq!(articles(TopicFilter::Only(Topic::WebDevelopment)).len(), 2);
    assert_eq!(articles(TopicFilter::All).len(), 5);
}

#[test]
fn exactly_one_featured_article() {
    assert_eq!(ARTICLES.iter().filter(|a| a.featured).count(), 1);
}

#[test]
fn roadmap_progress_is_a_percentage() {
    assert!(ROADMAP.iter().all(|r| r.progress <= 100));
}
