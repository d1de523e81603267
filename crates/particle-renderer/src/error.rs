use std::fmt;

/// Failures while bringing up the GPU
#[derive(Debug)]
pub enum RenderError {
    SurfaceCreation(wgpu::CreateSurfaceError),
    NoAdapter(wgpu::RequestAdapterError),
    DeviceCreation(wgpu::RequestDeviceError),
    /// The adapter reports no usable format for the surface
    UnsupportedSurface,
}

impl fmt::Display for RenderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RenderError::SurfaceCreation(e) => write!(f, "failed to create surface: {}", e),
            RenderError::NoAdapter(e) => write!(f, "no suitable GPU adapter: {}", e),
            RenderError::DeviceCreation(e) => write!(f, "failed to create device: {}", e),
            RenderError::UnsupportedSurface => {
                write!(f, "surface is not supported by the selected adapter")
            }
        }
    }
}

impl std::error::Error for RenderError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            RenderError::SurfaceCreation(e) => Some(e),
            RenderError::NoAdapter(e) => Some(e),
            RenderError::DeviceCreation(e) => Some(e),
            RenderError::UnsupportedSurface => None,
        }
    }
}

impl From<wgpu::CreateSurfaceError> for RenderError {
    fn from(e: wgpu::CreateSurfaceError) -> Self {
        RenderError::SurfaceCreation(e)
    }
}

impl From<wgpu::RequestAdapterError> for RenderError {
    fn from(e: wgpu::RequestAdapterError) -> Self {
        RenderError::NoAdapter(e)
    }
}

impl From<wgpu::RequestDeviceError> for RenderError {
    fn from(e: wgpu::RequestDeviceError) -> Self {
        RenderError::DeviceCreation(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unsupported_surface_has_no_source() {
        let err = RenderError::UnsupportedSurface;
        assert!(std::error::Error::source(&err).is_none());
        assert!(err.to_string().contains("not supported"));
    }
}
