use resource_actor::tracing::setup_tracing;
use resource_actor::{ActorEntity, FrameworkError, ResourceActor};
use async_trait::async_trait;

// --- Test Entity ---

#[derive(Clone, Debug, PartialEq)]
struct Wishlist {
    id: u32,
    owner: String,
    entries: Vec<String>,
}

#[derive(Debug)]
struct WishlistCreate {
    owner: String,
}

#[derive(Debug)]
struct WishlistUpdate {
    owner: Option<String>,
}

#[derive(Debug)]
enum WishlistAction {
    Add(String),
    Count,
}

#[derive(Debug, thiserror::Error, PartialEq)]
enum WishlistError {
    #[error("owner must not be empty")]
    EmptyOwner,
    #[error("already listed: {0}")]
    Duplicate(String),
}

#[async_trait]
impl ActorEntity for Wishlist {
    type Id = u32;
    type Create = WishlistCreate;
    type Update = WishlistUpdate;
    type Action = WishlistAction;
    type ActionResult = usize;
    type Context = ();
    type Error = WishlistError;

    fn from_create_params(id: u32, params: WishlistCreate) -> Result<Self, Self::Error> {
        if params.owner.is_empty() {
            return Err(WishlistError::EmptyOwner);
        }
        Ok(Self {
            id,
            owner: params.owner,
            entries: Vec::new(),
        })
    }

    async fn on_update(
        &mut self,
        update: WishlistUpdate,
        _ctx: &Self::Context,
    ) -> Result<(), Self::Error> {
        if let Some(owner) = update.owner {
            self.owner = owner;
        }
        Ok(())
    }

    async fn handle_action(
        &mut self,
        action: WishlistAction,
        _ctx: &Self::Context,
    ) -> Result<usize, Self::Error> {
        match action {
            WishlistAction::Add(entry) => {
                if self.entries.contains(&entry) {
                    return Err(WishlistError::Duplicate(entry));
                }
                self.entries.push(entry);
                Ok(self.entries.len())
            }
            WishlistAction::Count => Ok(self.entries.len()),
        }
    }
}

fn create(owner: &str) -> WishlistCreate {
    WishlistCreate {
        owner: owner.to_string(),
    }
}

// --- Tests ---

#[tokio::test]
async fn test_framework_full_lifecycle() {
    // Exercises the log statements on every request path
    setup_tracing();
    let (actor, client) = ResourceActor::new(10);
    tokio::spawn(actor.run(()));

    let id: u32 = client.create(create("Sari")).await.unwrap();
    assert_eq!(id, 1);

    let count = client
        .perform_action(id, WishlistAction::Add("Sunscreen SPF50".into()))
        .await
        .unwrap();
    assert_eq!(count, 1);

    let list: Wishlist = client.get(id).await.unwrap().unwrap();
    assert_eq!(list.entries, vec!["Sunscreen SPF50".to_string()]);

    let updated = client
        .update(
            id,
            WishlistUpdate {
                owner: Some("Dewi".into()),
            },
        )
        .await
        .unwrap();
    assert_eq!(updated.owner, "Dewi");

    client.delete(id).await.unwrap();
    assert!(client.get(id).await.unwrap().is_none());
}

#[tokio::test]
async fn test_list_is_ordered_by_id() {
    let (actor, client) = ResourceActor::<Wishlist>::new(10);
    tokio::spawn(actor.run(()));

    for owner in ["a", "b", "c", "d", "e", "f", "g", "h", "i", "j", "k"] {
        client.create(create(owner)).await.unwrap();
    }
    client.delete(3).await.unwrap();

    let ids: Vec<u32> = client.list().await.unwrap().iter().map(|w| w.id).collect();
    assert_eq!(ids, vec![1, 2, 4, 5, 6, 7, 8, 9, 10, 11]);
}

#[tokio::test]
async fn test_failed_create_is_not_stored_and_keeps_error_type() {
    let (actor, client) = ResourceActor::<Wishlist>::new(10);
    tokio::spawn(actor.run(()));

    let err = client.create(create("")).await.unwrap_err();
    assert_eq!(
        err.entity_error::<WishlistError>(),
        Some(&WishlistError::EmptyOwner)
    );
    assert!(client.list().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_failed_action_leaves_state_untouched() {
    let (actor, client) = ResourceActor::<Wishlist>::new(10);
    tokio::spawn(actor.run(()));

    let id = client.create(create("Rina")).await.unwrap();
    client
        .perform_action(id, WishlistAction::Add("Toner".into()))
        .await
        .unwrap();

    let err = client
        .perform_action(id, WishlistAction::Add("Toner".into()))
        .await
        .unwrap_err();
    assert!(matches!(err, FrameworkError::EntityError(_)));

    let count = client.perform_action(id, WishlistAction::Count).await.unwrap();
    assert_eq!(count, 1);
}

#[tokio::test]
async fn test_unknown_id_is_not_found() {
    let (actor, client) = ResourceActor::<Wishlist>::new(10);
    tokio::spawn(actor.run(()));

    let err = client
        .perform_action(42, WishlistAction::Count)
        .await
        .unwrap_err();
    assert!(matches!(err, FrameworkError::NotFound(id) if id == "42"));

    let err = client.delete(42).await.unwrap_err();
    assert!(matches!(err, FrameworkError::NotFound(_)));
}

#[tokio::test]
async fn test_actor_stops_when_clients_dropped() {
    let (actor, client) = ResourceActor::<Wishlist>::new(10);
    let handle = tokio::spawn(actor.run(()));

    client.create(create("Putri")).await.unwrap();
    drop(client);

    handle.await.unwrap();
}
