mod common;

use common::{PROJECT, seed_dependency, seed_epic_only_task, seed_epic_task, seed_roadmap_item};

use cf_appwrite::MemoryStore;
use cf_core::DependencyType;
use cf_service::RoadmapService;

use googletest::prelude::*;

#[tokio::test]
async fn given_cross_epic_task_links_when_inferring_then_edges_between_items() {
    // Given: items A (epic-a) and B (epic-b); two links from a task in A to tasks in B
    let store = MemoryStore::new();
    seed_roadmap_item(&store, "item-a", PROJECT, "epic-a").await;
    seed_roadmap_item(&store, "item-b", PROJECT, "epic-b").await;
    seed_epic_task(&store, "a1", PROJECT, "epic-a").await;
    seed_epic_task(&store, "a2", PROJECT, "epic-a").await;
    seed_epic_task(&store, "b1", PROJECT, "epic-b").await;
    seed_epic_task(&store, "b2", PROJECT, "epic-b").await;
    seed_dependency(&store, "d1", "b1", "a1", "finish_to_start").await;
    seed_dependency(&store, "d2", "b2", "a1", "start_to_start").await;
    // Same item on both sides
    seed_dependency(&store, "d3", "a2", "a1", "finish_to_start").await;

    // When
    let edges = RoadmapService::new(store)
        .infer_dependencies(PROJECT)
        .await
        .unwrap();

    // Then
    assert_that!(edges.len(), eq(1));
    let edge = &edges[0];
    assert_that!(edge.from, eq("item-a"));
    assert_that!(edge.to, eq("item-b"));
    assert_that!(edge.dependency_type, eq(DependencyType::FinishToStart));
    assert_that!(edge.link_count, eq(2));
}

#[tokio::test]
async fn given_task_linked_only_through_epic_when_inferring_then_its_links_count() {
    // Given: b1 carries no projectId, only epic-b
    let store = MemoryStore::new();
    seed_roadmap_item(&store, "item-a", PROJECT, "epic-a").await;
    seed_roadmap_item(&store, "item-b", PROJECT, "epic-b").await;
    seed_epic_task(&store, "a1", PROJECT, "epic-a").await;
    seed_epic_only_task(&store, "b1", "epic-b").await;
    seed_dependency(&store, "d1", "b1", "a1", "finish_to_start").await;

    // When
    let edges = RoadmapService::new(store)
        .infer_dependencies(PROJECT)
        .await
        .unwrap();

    // Then
    assert_that!(edges.len(), eq(1));
    assert_that!(edges[0].from, eq("item-a"));
    assert_that!(edges[0].to, eq("item-b"));
    assert_that!(edges[0].link_count, eq(1));
}

#[tokio::test]
async fn given_other_project_data_when_inferring_then_it_is_ignored() {
    // Given
    let store = MemoryStore::new();
    seed_roadmap_item(&store, "item-a", PROJECT, "epic-a").await;
    seed_roadmap_item(&store, "item-x", "project-2", "epic-x").await;
    seed_epic_task(&store, "a1", PROJECT, "epic-a").await;
    seed_epic_task(&store, "x1", "project-2", "epic-x").await;
    seed_dependency(&store, "d1", "x1", "a1", "finish_to_start").await;

    // When
    let edges = RoadmapService::new(store)
        .infer_dependencies(PROJECT)
        .await
        .unwrap();

    // Then
    assert_that!(edges, is_empty());
}

#[tokio::test]
async fn given_empty_project_when_inferring_then_no_edges() {
    let edges = RoadmapService::new(MemoryStore::new())
        .infer_dependencies(PROJECT)
        .await
        .unwrap();

    assert_that!(edges, is_empty());
}
