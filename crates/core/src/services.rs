//! Evento service
//!
//! Thin façade over an `EventoStore`. Lookups that find nothing come back as
//! `Ok(None)` (or `Ok(false)` for deletes); only store failures are errors.

use std::sync::Arc;

use crate::error::Result;
use crate::models::{Evento, EventoId, Palestrante, PalestranteId};
use crate::store::EventoStore;

/// Evento Service
#[derive(Clone)]
pub struct EventoService {
    store: Arc<dyn EventoStore>,
}

impl EventoService {
    pub fn new(store: Arc<dyn EventoStore>) -> Self {
        Self { store }
    }

    /// All eventos; `None` when there are none
    pub async fn get_all_eventos(&self, incluir_palestrantes: bool) -> Result<Option<Vec<Evento>>> {
        let eventos = self.store.list(incluir_palestrantes).await?;
        Ok(non_empty(eventos))
    }

    pub async fn get_evento_by_id(
        &self,
        id: EventoId,
        incluir_palestrantes: bool,
    ) -> Result<Option<Evento>> {
        self.store.get(id, incluir_palestrantes).await
    }

    /// Eventos matching `tema`; `None` when nothing matches
    pub async fn get_eventos_by_tema(
        &self,
        tema: &str,
        incluir_palestrantes: bool,
    ) -> Result<Option<Vec<Evento>>> {
        let eventos = self.store.list_by_tema(tema, incluir_palestrantes).await?;
        Ok(non_empty(eventos))
    }

    /// Store a new evento and return it as the store now sees it
    pub async fn add_evento(&self, evento: &Evento) -> Result<Option<Evento>> {
        let created = self.store.insert(evento).await?;
        log::debug!("Evento {} cadastrado", created.evento_id);
        self.store.get(created.evento_id, false).await
    }

    /// Update evento `id`. The `id` argument wins over `evento.evento_id`.
    pub async fn update_evento(&self, id: EventoId, evento: &Evento) -> Result<Option<Evento>> {
        if evento.evento_id != 0 && evento.evento_id != id {
            log::warn!(
                "Payload eventoId {} ignored, updating evento {}",
                evento.evento_id,
                id
            );
        }

        let Some(updated) = self.store.update(id, evento).await? else {
            return Ok(None);
        };
        self.store.get(updated.evento_id, false).await
    }

    pub async fn delete_evento(&self, id: EventoId) -> Result<bool> {
        self.store.delete(id).await
    }

    pub async fn add_palestrante(&self, palestrante: &Palestrante) -> Result<Palestrante> {
        self.store.insert_palestrante(palestrante).await
    }

    pub async fn link_palestrante(
        &self,
        evento_id: EventoId,
        palestrante_id: PalestranteId,
    ) -> Result<bool> {
        self.store.link_palestrante(evento_id, palestrante_id).await
    }
}

fn non_empty(eventos: Vec<Evento>) -> Option<Vec<Evento>> {
    if eventos.is_empty() {
        None
    } else {
        Some(eventos)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryEventoStore;

    fn service() -> EventoService {
        EventoService::new(Arc::new(MemoryEventoStore::new()))
    }

    #[tokio::test]
    async fn test_empty_store_is_absent() {
        let service = service();
        assert!(service.get_all_eventos(false).await.unwrap().is_none());
        assert!(service.get_eventos_by_tema("rust", false).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_evento_service_crud() {
        let service = service();

        // Create
        let created = service
            .add_evento(&Evento::new("Rust", "BH").with_qtd_pessoas(100))
            .await
            .unwrap()
            .unwrap();
        assert_eq!(created.evento_id, 1);

        // Read
        let fetched = service.get_evento_by_id(1, false).await.unwrap().unwrap();
        assert_eq!(fetched, created);

        // Update
        let updated = service
            .update_evento(1, &Evento::new("Rust avançado", "SP"))
            .await
            .unwrap()
            .unwrap();
        assert_eq!(updated.tema, "Rust avançado");
        assert_eq!(updated.qtd_pessoas, 0);

        // Delete
        assert!(service.delete_evento(1).await.unwrap());
        assert!(!service.delete_evento(1).await.unwrap());
        assert!(service.get_evento_by_id(1, false).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_update_uses_id_argument() {
        let service = service();
        service.add_evento(&Evento::new("A", "BH")).await.unwrap();
        service.add_evento(&Evento::new("B", "BH")).await.unwrap();

        let mut payload = Evento::new("B2", "RJ");
        payload.evento_id = 1;

        let updated = service.update_evento(2, &payload).await.unwrap().unwrap();
        assert_eq!(updated.evento_id, 2);

        let untouched = service.get_evento_by_id(1, false).await.unwrap().unwrap();
        assert_eq!(untouched.tema, "A");
    }

    #[tokio::test]
    async fn test_update_missing_is_absent() {
        let service = service();
        let result = service.update_evento(5, &Evento::new("x", "y")).await.unwrap();
        assert!(result.is_none());
    }

    #[tokio::test]
    async fn test_link_palestrante() {
        let service = service();
        service.add_evento(&Evento::new("Rust", "BH")).await.unwrap();
        let palestrante = service.add_palestrante(&Palestrante::new("Carla")).await.unwrap();

        assert!(service.link_palestrante(1, palestrante.palestrante_id).await.unwrap());

        let evento = service.get_evento_by_id(1, true).await.unwrap().unwrap();
        assert_eq!(evento.palestrantes.unwrap()[0].nome, "Carla");
    }
}
