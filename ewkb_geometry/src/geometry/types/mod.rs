// Concrete geometry kinds of the object model: `PointGeometry`, `LineStringGeometry`,
// `PolygonGeometry` and their multi-geometry counterparts. Every kind carries an optional SRID
// and exposes its type tag through `GeometryTrait`; the composite kinds share the list accessors
// of `CompositeGeometryTrait`.

mod coordinates;
mod linestring;
mod macros;
mod multi_linestring;
mod multi_point;
mod multi_polygon;
mod point;
mod polygon;
mod traits;

pub use coordinates::*;
pub use linestring::*;
pub use multi_linestring::*;
pub use multi_point::*;
pub use multi_polygon::*;
pub use point::*;
pub use polygon::*;
pub use traits::*;
