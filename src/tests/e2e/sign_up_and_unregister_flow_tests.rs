use crate::modules::activities::adapters::outbound::activity_store::ActivityStore;
use crate::modules::activities::adapters::outbound::activity_store_in_memory::InMemoryActivityStore;
use crate::modules::activities::application::errors::ApplicationError;
use crate::modules::activities::core::activity::CapacityPolicy;
use crate::modules::activities::core::errors::DecideError;
use crate::modules::activities::use_cases::list_activities::queries_port::ActivityQueries;
use crate::modules::activities::use_cases::sign_up_for_activity::handler::SignUpForActivityHandler;
use crate::modules::activities::use_cases::unregister_from_activity::handler::UnregisterFromActivityHandler;
use crate::tests::fixtures::commands::{sign_up, unregister};
use std::sync::Arc;

#[tokio::test]
async fn signs_up_unregisters_and_signs_up_again() {
    let store = Arc::new(InMemoryActivityStore::seeded());
    let sign_up_handler = SignUpForActivityHandler::new(store.clone(), CapacityPolicy::Advisory);
    let unregister_handler = UnregisterFromActivityHandler::new(store.clone());

    for _ in 0..3 {
        sign_up_handler
            .handle(sign_up("Drama Club", "student@mergington.edu"))
            .await
            .unwrap();
        let drama_club = store.find_activity("Drama Club").await.unwrap().unwrap();
        assert!(
            drama_club
                .participants
                .contains(&"student@mergington.edu".to_string())
        );

        unregister_handler
            .handle(unregister("Drama Club", "student@mergington.edu"))
            .await
            .unwrap();
        let drama_club = store.find_activity("Drama Club").await.unwrap().unwrap();
        assert_eq!(drama_club.participants, vec!["alex@mergington.edu"]);
    }
}

#[tokio::test]
async fn rejects_every_operation_on_an_unknown_activity() {
    let store = Arc::new(InMemoryActivityStore::seeded());
    let sign_up_handler = SignUpForActivityHandler::new(store.clone(), CapacityPolicy::Advisory);
    let unregister_handler = UnregisterFromActivityHandler::new(store.clone());

    for email in ["test@mergington.edu", "michael@mergington.edu", ""] {
        let signed_up = sign_up_handler
            .handle(sign_up("Nonexistent Club", email))
            .await;
        assert!(matches!(
            signed_up,
            Err(ApplicationError::Domain(DecideError::ActivityNotFound))
        ));

        let unregistered = unregister_handler
            .handle(unregister("Nonexistent Club", email))
            .await;
        assert!(matches!(
            unregistered,
            Err(ApplicationError::Domain(DecideError::ActivityNotFound))
        ));
    }
}

#[tokio::test]
async fn empties_an_activity_and_resets_it_to_the_seed() {
    let store = Arc::new(InMemoryActivityStore::seeded());
    let unregister_handler = UnregisterFromActivityHandler::new(store.clone());
    let seeded = store.list_activities().await.unwrap();

    for email in ["michael@mergington.edu", "daniel@mergington.edu"] {
        unregister_handler
            .handle(unregister("Chess Club", email))
            .await
            .unwrap();
    }
    let chess_club = store.find_activity("Chess Club").await.unwrap().unwrap();
    assert!(chess_club.participants.is_empty());

    store.reset().await.unwrap();
    assert_eq!(store.list_activities().await.unwrap(), seeded);
}
