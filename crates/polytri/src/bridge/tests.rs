use std::os::raw::c_int;
use std::sync::atomic::{AtomicBool, Ordering};

use super::*;
use crate::geom2::{Point, Polygon, Triangle};

fn poly(pts: &[(f64, f64)]) -> Polygon {
    Polygon::new(pts.iter().map(|&(x, y)| Point::new(x, y)).collect()).unwrap()
}

fn square(x0: f64, y0: f64, side: f64) -> Polygon {
    poly(&[(x0, y0), (x0, y0 + side), (x0 + side, y0 + side), (x0 + side, y0)])
}

/// Records the buffers it is handed and replays a fixed answer.
#[derive(Default)]
struct RecordingEngine {
    calls: usize,
    polygon_count: Option<c_int>,
    input: Vec<f64>,
    output_len: usize,
    reply: Vec<f64>,
    count: c_int,
}

impl TriangulationEngine for RecordingEngine {
    fn triangulate(&mut self, polygon_count: c_int, input: &[f64], output: &mut [f64]) -> c_int {
        self.calls += 1;
        self.polygon_count = Some(polygon_count);
        self.input = input.to_vec();
        self.output_len = output.len();
        let n = self.reply.len().min(output.len());
        output[..n].copy_from_slice(&self.reply[..n]);
        self.count
    }
}

#[test]
fn encode_single_triangle() {
    let buf = encode(&[poly(&[(0.0, 0.0), (1.0, 0.0), (1.0, 1.0)])]);
    let s = buf.as_slice();
    assert_eq!(s.len(), 7);
    assert_eq!(&s[..6], &[0.0, 0.0, 1.0, 0.0, 1.0, 1.0]);
    assert!(s[6].is_nan());
}

#[test]
fn encode_places_one_sentinel_per_polygon() {
    let polys = vec![square(0.0, 0.0, 10.0), poly(&[(20.0, 0.0), (21.0, 0.0), (21.0, 1.0)])];
    let buf = encode(&polys);
    assert_eq!(buf.len(), 2 * 7 + 2);
    assert_eq!(buf.len(), encoded_len(&polys));
    let nan_at: Vec<usize> = buf
        .as_slice()
        .iter()
        .enumerate()
        .filter(|(_, v)| v.is_nan())
        .map(|(i, _)| i)
        .collect();
    assert_eq!(nan_at, vec![8, 15]);
    // the engine-side reader recovers the rings
    let rings = read_input(2, buf.as_slice()).unwrap();
    assert_eq!(rings[0], square(0.0, 0.0, 10.0));
    assert_eq!(rings[1].len(), 3);
    // polygon count must match the stream exactly
    assert!(read_input(1, buf.as_slice()).is_none());
    assert!(read_input(3, buf.as_slice()).is_none());
}

#[test]
fn sizing_rule() {
    assert_eq!(max_triangles(5, 0), 3);
    assert_eq!(output_capacity(5, 0), 18);
    // square with a square hole: 8 vertices, one hole -> 8 triangles
    assert_eq!(max_triangles(8, 1), 8);
    assert_eq!(output_capacity(8, 1), 48);
    assert_eq!(max_triangles(0, 0), 0);
}

#[test]
fn decode_fixed_stride_in_engine_order() {
    let out = [0.0, 0.0, 1.0, 0.0, 0.0, 1.0, 5.0, 5.0, 6.0, 5.0, 5.0, 6.0];
    let tris = decode(&out, 2);
    assert_eq!(tris.len(), 2);
    assert_eq!(
        tris[1],
        Triangle::new(Point::new(5.0, 5.0), Point::new(6.0, 5.0), Point::new(5.0, 6.0))
    );
    assert!(decode(&out, 0).is_empty());
    // trailing capacity is ignored
    assert_eq!(decode(&out, 1).len(), 1);
}

#[test]
fn empty_input_does_not_call_engine() {
    let mut bridge = MarshallingBridge::new(RecordingEngine::default());
    assert_eq!(bridge.triangulate(&[]), Ok(Vec::new()));
    assert_eq!(bridge.engine().calls, 0);
}

#[test]
fn hole_sizes_output_with_h_equal_one() {
    let polys = vec![square(0.0, 0.0, 100.0), square(25.0, 25.0, 50.0)];
    let mut bridge = MarshallingBridge::new(RecordingEngine::default());
    let tris = bridge.triangulate(&polys).unwrap();
    assert!(tris.is_empty());
    let engine = bridge.into_inner();
    assert_eq!(engine.calls, 1);
    assert_eq!(engine.polygon_count, Some(2));
    assert_eq!(engine.input.len(), 2 * 8 + 2);
    // N = 8, H = 1: 6 * (8 - 2 + 2) doubles
    assert_eq!(engine.output_len, 48);
}

#[test]
fn zero_triangles_is_not_an_error() {
    let mut bridge = MarshallingBridge::new(RecordingEngine::default());
    assert_eq!(bridge.triangulate(&[square(0.0, 0.0, 1.0)]), Ok(Vec::new()));
}

#[test]
fn engine_count_is_validated() {
    let polys = [poly(&[(0.0, 0.0), (1.0, 0.0), (1.0, 1.0)])];
    let mut negative = MarshallingBridge::new(RecordingEngine {
        count: -1,
        ..Default::default()
    });
    assert_eq!(negative.triangulate(&polys), Err(BridgeError::NegativeCount(-1)));

    let mut overrun = MarshallingBridge::new(RecordingEngine {
        count: 2,
        ..Default::default()
    });
    assert_eq!(
        overrun.triangulate(&polys),
        Err(BridgeError::Overflow { count: 2, capacity: 1 })
    );
}

fn pentagon() -> Polygon {
    poly(&[
        (100.0, 100.0),
        (100.0, 200.0),
        (200.0, 300.0),
        (300.0, 200.0),
        (300.0, 100.0),
    ])
}

#[test]
fn undersized_output_is_refused_before_the_call() {
    let input = encode(&[pentagon()]);
    let mut output = ForeignBuffer::zeroed(6);
    let mut engine = RecordingEngine {
        reply: vec![1.0; 18],
        count: 3,
        ..Default::default()
    };
    assert_eq!(
        call_engine(&mut engine, 1, &input, &mut output),
        Err(BridgeError::UndersizedOutput { required: 18, given: 6 })
    );
    assert_eq!(engine.calls, 0);
    assert_eq!(output.as_slice(), &[0.0; 6]);

    let mut output = ForeignBuffer::zeroed(18);
    assert_eq!(call_engine(&mut engine, 1, &input, &mut output), Ok(3));
    assert_eq!(engine.calls, 1);
}

#[test]
fn polygon_count_must_match_input() {
    let input = encode(&[pentagon()]);
    let mut output = ForeignBuffer::zeroed(64);
    let mut engine = RecordingEngine::default();
    assert_eq!(
        call_engine(&mut engine, 2, &input, &mut output),
        Err(BridgeError::MalformedInput { polygon_count: 2 })
    );
    assert_eq!(
        call_engine(&mut engine, 0, &input, &mut output),
        Err(BridgeError::MalformedInput { polygon_count: 0 })
    );
    // a polygon with fewer than three vertices never reaches the engine
    let short = [0.0, 0.0, 1.0, 0.0, f64::NAN];
    assert_eq!(
        check_buffers(1, &short, output.as_slice()),
        Err(BridgeError::MalformedInput { polygon_count: 1 })
    );
    assert_eq!(engine.calls, 0);
}

#[test]
fn hole_raises_required_output() {
    let polys = [square(0.0, 0.0, 100.0), square(25.0, 25.0, 50.0)];
    let input = encode(&polys);
    assert_eq!(check_buffers(2, input.as_slice(), &[0.0; 48]), Ok(48));
    // 36 doubles would do for N = 8 without the hole
    assert_eq!(
        check_buffers(2, input.as_slice(), &[0.0; 36]),
        Err(BridgeError::UndersizedOutput { required: 48, given: 36 })
    );
}

#[test]
fn fan_engine_pentagon() {
    let pentagon = pentagon();
    let mut engine = FanEngine::new();
    let tris = MarshallingBridge::new(&mut engine)
        .triangulate(std::slice::from_ref(&pentagon))
        .unwrap();
    assert_eq!(engine.calls(), 1);
    assert_eq!(tris.len(), 3);
    let total: f64 = tris.iter().map(|t| t.signed_area().abs()).sum();
    assert!((total - pentagon.signed_area().abs()).abs() < 1e-9);
    assert!(tris.iter().all(|t| t.a == pentagon.first()));
}

extern "C" fn unit_triangle_engine(num_polygons: c_int, data: *const f64, result: *mut f64) -> c_int {
    if num_polygons < 1 || data.is_null() {
        return 0;
    }
    let tri = [0.0, 0.0, 1.0, 0.0, 0.0, 1.0];
    // SAFETY: the bridge sizes the output for at least one triangle for any polygon.
    unsafe { std::ptr::copy_nonoverlapping(tri.as_ptr(), result, tri.len()) };
    1
}

#[test]
fn extern_engine_goes_through_function_pointer() {
    let engine = unsafe { ExternEngine::new(unit_triangle_engine) };
    let mut bridge = MarshallingBridge::new(engine);
    let tris = bridge.triangulate(&[square(0.0, 0.0, 2.0)]).unwrap();
    assert_eq!(
        tris,
        vec![Triangle::new(Point::new(0.0, 0.0), Point::new(1.0, 0.0), Point::new(0.0, 1.0))]
    );
}

static WRITER_CALLED: AtomicBool = AtomicBool::new(false);

extern "C" fn flagging_engine(_num_polygons: c_int, _data: *const f64, _result: *mut f64) -> c_int {
    WRITER_CALLED.store(true, Ordering::SeqCst);
    0
}

#[test]
fn extern_engine_refuses_undersized_output() {
    let mut engine = unsafe { ExternEngine::new(flagging_engine) };
    let input = encode(&[pentagon()]);
    let mut short = vec![0.0; 6];
    assert!(engine.triangulate(1, input.as_slice(), &mut short) < 0);
    assert!(engine.triangulate(-1, input.as_slice(), &mut short) < 0);
    assert!(engine.triangulate(2, input.as_slice(), &mut [0.0; 64]) < 0);
    assert!(!WRITER_CALLED.load(Ordering::SeqCst));

    let mut sized = vec![0.0; output_capacity(5, 0)];
    assert_eq!(engine.triangulate(1, input.as_slice(), &mut sized), 0);
    assert!(WRITER_CALLED.load(Ordering::SeqCst));
}

#[test]
fn foreign_buffer_is_allocated_once() {
    let mut buf = ForeignBuffer::with_capacity(3);
    assert!(buf.is_empty());
    let reserved = buf.capacity();
    assert!(reserved >= 3);
    buf.push(1.0);
    buf.push(2.0);
    buf.push(3.0);
    assert_eq!(buf.as_slice(), &[1.0, 2.0, 3.0]);
    assert_eq!(buf.capacity(), reserved);
    let zeros = ForeignBuffer::zeroed(4);
    assert_eq!(zeros.as_slice(), &[0.0; 4]);
}
