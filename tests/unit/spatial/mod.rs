mod extension;
mod transform;
