//! Store contract for eventos, plus the in-memory implementation
//!
//! Every implementation follows the same rules:
//! - lists are ordered by ascending id (speakers too)
//! - tema lookups are a case-insensitive substring match
//! - `palestrantes` is `None` unless `incluir_palestrantes` is set
//! - ids are never reused once handed out
//! - deleting an evento drops its speaker links, never the speakers

use async_trait::async_trait;
use std::collections::{BTreeMap, BTreeSet};
use tokio::sync::RwLock;

use crate::error::Result;
use crate::models::{Evento, EventoId, Palestrante, PalestranteId};

/// Persistence collaborator behind `EventoService`
#[async_trait]
pub trait EventoStore: Send + Sync {
    /// All eventos, ordered by id
    async fn list(&self, incluir_palestrantes: bool) -> Result<Vec<Evento>>;

    /// One evento by id
    async fn get(&self, id: EventoId, incluir_palestrantes: bool) -> Result<Option<Evento>>;

    /// Eventos whose tema contains `tema`, ignoring case
    async fn list_by_tema(&self, tema: &str, incluir_palestrantes: bool) -> Result<Vec<Evento>>;

    /// Insert a new evento. The incoming id is ignored and a fresh one assigned.
    async fn insert(&self, evento: &Evento) -> Result<Evento>;

    /// Overwrite the scalar fields of evento `id`. `None` when it doesn't exist.
    async fn update(&self, id: EventoId, evento: &Evento) -> Result<Option<Evento>>;

    /// Remove evento `id`; false when nothing was removed
    async fn delete(&self, id: EventoId) -> Result<bool>;

    /// Insert a new palestrante with a fresh id
    async fn insert_palestrante(&self, palestrante: &Palestrante) -> Result<Palestrante>;

    /// Associate a palestrante with an evento. False when either side is unknown.
    async fn link_palestrante(
        &self,
        evento_id: EventoId,
        palestrante_id: PalestranteId,
    ) -> Result<bool>;
}

struct MemoryState {
    eventos: BTreeMap<EventoId, Evento>,
    palestrantes: BTreeMap<PalestranteId, Palestrante>,
    links: BTreeSet<(EventoId, PalestranteId)>,
    next_evento_id: EventoId,
    next_palestrante_id: PalestranteId,
}

impl MemoryState {
    fn view(&self, evento: &Evento, incluir_palestrantes: bool) -> Evento {
        let id = evento.evento_id;
        let mut evento = evento.clone();
        evento.palestrantes = incluir_palestrantes.then(|| {
            self.links
                .range((id, PalestranteId::MIN)..=(id, PalestranteId::MAX))
                .filter_map(|(_, palestrante_id)| self.palestrantes.get(palestrante_id))
                .cloned()
                .collect()
        });
        evento
    }
}

/// In-process store, used by tests and for running the API without a database
pub struct MemoryEventoStore {
    state: RwLock<MemoryState>,
}

impl Default for MemoryEventoStore {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryEventoStore {
    pub fn new() -> Self {
        Self {
            state: RwLock::new(MemoryState {
                eventos: BTreeMap::new(),
                palestrantes: BTreeMap::new(),
                links: BTreeSet::new(),
                next_evento_id: 1,
                next_palestrante_id: 1,
            }),
        }
    }
}

#[async_trait]
impl EventoStore for MemoryEventoStore {
    async fn list(&self, incluir_palestrantes: bool) -> Result<Vec<Evento>> {
        let state = self.state.read().await;
        Ok(state
            .eventos
            .values()
            .map(|evento| state.view(evento, incluir_palestrantes))
            .collect())
    }

    async fn get(&self, id: EventoId, incluir_palestrantes: bool) -> Result<Option<Evento>> {
        let state = self.state.read().await;
        Ok(state
            .eventos
            .get(&id)
            .map(|evento| state.view(evento, incluir_palestrantes)))
    }

    async fn list_by_tema(&self, tema: &str, incluir_palestrantes: bool) -> Result<Vec<Evento>> {
        let state = self.state.read().await;
        Ok(state
            .eventos
            .values()
            .filter(|evento| evento.matches_tema(tema))
            .map(|evento| state.view(evento, incluir_palestrantes))
            .collect())
    }

    async fn insert(&self, evento: &Evento) -> Result<Evento> {
        let mut state = self.state.write().await;
        let id = state.next_evento_id;
        state.next_evento_id += 1;

        let mut stored = Evento {
            evento_id: id,
            palestrantes: None,
            ..Evento::default()
        };
        stored.apply(evento);
        state.eventos.insert(id, stored.clone());

        Ok(stored)
    }

    async fn update(&self, id: EventoId, evento: &Evento) -> Result<Option<Evento>> {
        let mut state = self.state.write().await;
        Ok(state.eventos.get_mut(&id).map(|stored| {
            stored.apply(evento);
            stored.clone()
        }))
    }

    async fn delete(&self, id: EventoId) -> Result<bool> {
        let mut state = self.state.write().await;
        if state.eventos.remove(&id).is_none() {
            return Ok(false);
        }
        state.links.retain(|(evento_id, _)| *evento_id != id);
        Ok(true)
    }

    async fn insert_palestrante(&self, palestrante: &Palestrante) -> Result<Palestrante> {
        let mut state = self.state.write().await;
        let id = state.next_palestrante_id;
        state.next_palestrante_id += 1;

        let stored = Palestrante {
            palestrante_id: id,
            ..palestrante.clone()
        };
        state.palestrantes.insert(id, stored.clone());

        Ok(stored)
    }

    async fn link_palestrante(
        &self,
        evento_id: EventoId,
        palestrante_id: PalestranteId,
    ) -> Result<bool> {
        let mut state = self.state.write().await;
        if !state.eventos.contains_key(&evento_id) || !state.palestrantes.contains_key(&palestrante_id) {
            return Ok(false);
        }
        state.links.insert((evento_id, palestrante_id));
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn seeded() -> MemoryEventoStore {
        let store = MemoryEventoStore::new();
        store.insert(&Evento::new("Angular", "BH")).await.unwrap();
        store.insert(&Evento::new(".NET 5", "SP")).await.unwrap();
        store.insert(&Evento::new("angular avançado", "RJ")).await.unwrap();
        store
    }

    #[tokio::test]
    async fn test_insert_assigns_ids() {
        let store = MemoryEventoStore::new();

        let mut payload = Evento::new("Rust", "BH");
        payload.evento_id = 42;

        let first = store.insert(&payload).await.unwrap();
        let second = store.insert(&payload).await.unwrap();
        assert_eq!(first.evento_id, 1);
        assert_eq!(second.evento_id, 2);
        assert_eq!(store.list(false).await.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_ids_not_reused_after_delete() {
        let store = seeded().await;
        assert!(store.delete(3).await.unwrap());

        let evento = store.insert(&Evento::new("Go", "POA")).await.unwrap();
        assert_eq!(evento.evento_id, 4);
    }

    #[tokio::test]
    async fn test_list_by_tema_ignores_case() {
        let store = seeded().await;

        let ids: Vec<_> = store
            .list_by_tema("ANGULAR", false)
            .await
            .unwrap()
            .into_iter()
            .map(|e| e.evento_id)
            .collect();
        assert_eq!(ids, vec![1, 3]);
    }

    #[tokio::test]
    async fn test_update_missing() {
        let store = seeded().await;
        let result = store.update(99, &Evento::new("x", "y")).await.unwrap();
        assert!(result.is_none());
    }

    #[tokio::test]
    async fn test_palestrantes_only_when_requested() {
        let store = seeded().await;
        let palestrante = store
            .insert_palestrante(&Palestrante::new("Ana").with_email("ana@example.com"))
            .await
            .unwrap();

        assert!(store.link_palestrante(1, palestrante.palestrante_id).await.unwrap());
        // linking twice is harmless
        assert!(store.link_palestrante(1, palestrante.palestrante_id).await.unwrap());
        assert!(!store.link_palestrante(99, palestrante.palestrante_id).await.unwrap());
        assert!(!store.link_palestrante(1, 99).await.unwrap());

        let without = store.get(1, false).await.unwrap().unwrap();
        assert_eq!(without.palestrantes, None);

        let with = store.get(1, true).await.unwrap().unwrap();
        assert_eq!(with.palestrantes, Some(vec![palestrante]));

        let other = store.get(2, true).await.unwrap().unwrap();
        assert_eq!(other.palestrantes, Some(vec![]));
    }

    #[tokio::test]
    async fn test_delete_drops_links() {
        let store = seeded().await;
        let palestrante = store.insert_palestrante(&Palestrante::new("Bruno")).await.unwrap();
        store.link_palestrante(2, palestrante.palestrante_id).await.unwrap();

        assert!(store.delete(2).await.unwrap());
        assert!(!store.delete(2).await.unwrap());
        assert!(!store.link_palestrante(2, palestrante.palestrante_id).await.unwrap());
    }
}
