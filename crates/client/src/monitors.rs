use models::{ListDocument, Monitor};

use crate::{
    client::Client,
    error::{Error, ListAllError},
    filter::MonitorFilter,
};

impl Client {
    /// Fetch one page of monitors.
    ///
    /// `page` is 1-based (values below 1 are clamped) and every call
    /// requests the maximum page size of 250. The returned envelope carries
    /// the pagination links for this snapshot.
    pub async fn list_monitors(
        &self,
        page: u64,
        filter: Option<&MonitorFilter>,
    ) -> Result<ListDocument<Monitor>, Error> {
        self.list_page(page, filter).await
    }

    /// Enumerate every monitor across all pages, in server order.
    ///
    /// Offset pagination is weakly consistent: if monitors are created or
    /// deleted while pages are being fetched, an item may show up twice or
    /// be missed. On failure the pages already fetched travel with the
    /// error.
    pub async fn list_all_monitors(&self) -> Result<Vec<Monitor>, ListAllError<Monitor>> {
        self.list_all().await
    }

    /// Return the monitors on the first page matching `filter`.
    pub async fn find_monitors(&self, filter: &MonitorFilter) -> Result<Vec<Monitor>, Error> {
        self.find(filter).await
    }

    /// Create a monitor. The returned attributes carry the server-assigned
    /// id.
    pub async fn create_monitor(&self, monitor: &Monitor) -> Result<Monitor, Error> {
        self.create_resource(monitor).await
    }

    /// Fetch a single monitor by id.
    pub async fn get_monitor(&self, id: &str) -> Result<Monitor, Error> {
        self.get_resource(id).await
    }

    /// Update a monitor in place.
    pub async fn update_monitor(&self, id: &str, monitor: &Monitor) -> Result<Monitor, Error> {
        self.update_resource(id, monitor).await
    }

    /// Delete a monitor by id.
    pub async fn delete_monitor(&self, id: &str) -> Result<(), Error> {
        self.delete_resource::<Monitor>(id).await
    }
}
