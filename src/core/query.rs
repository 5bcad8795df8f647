use crate::domain::model::Volume;
use crate::domain::ports::{ResponseSink, VolumeSource};
use crate::utils::error::Result;

/// Removable, visible volumes whose display name contains `name`.
pub fn list_volumes<S: VolumeSource + ?Sized>(source: &S, name: &str) -> Result<Vec<Volume>> {
    let mounted = source.mounted_volumes()?;
    tracing::debug!("OS reported {} mounted volumes", mounted.len());

    let volumes = mounted
        .into_iter()
        .filter(|v| !v.is_internal && !v.is_hidden())
        .filter(|v| name.is_empty() || v.name.contains(name))
        .map(|v| Volume::from_path(v.name, v.path.to_string_lossy()))
        .collect();

    Ok(volumes)
}

/// Prepends an "Eject All" entry once there is more than one volume to choose from.
pub fn build_services(volumes: Vec<Volume>) -> Vec<Volume> {
    if volumes.len() <= 1 {
        return volumes;
    }

    let mut services = Vec::with_capacity(volumes.len() + 1);
    services.push(Volume::eject_all(&volumes));
    services.extend(volumes);
    services
}

pub fn run_query<S, W>(source: &S, sink: &mut W, name: &str) -> Result<usize>
where
    S: VolumeSource + ?Sized,
    W: ResponseSink + ?Sized,
{
    let volumes = match list_volumes(source, name) {
        Ok(volumes) => volumes,
        Err(e) => {
            tracing::warn!("Volume enumeration failed, reporting none: {}", e);
            Vec::new()
        }
    };
    tracing::info!("Found {} ejectable volumes matching {:?}", volumes.len(), name);

    let services = build_services(volumes);
    sink.write_all(&services)?;
    Ok(services.len())
}
