//! C interface, enabled with the `ffi` feature.
//!
//! Graphs use `u64` weights. Unreachable vertices are reported as `u64::MAX`.

use libc::c_int;

use crate::algorithm::dijkstra::Dijkstra;
use crate::algorithm::ShortestPathAlgorithm;
use crate::graph::{MutableGraph, RandomGraphGenerator, RandomWeightAssigner, UndirectedGraph};

/// Status returned by fallible calls: zero on success
pub const USSSP_OK: c_int = 0;
pub const USSSP_ERR: c_int = -1;

#[repr(C)]
pub struct FfiGraph {
    graph: UndirectedGraph<u64>,
}

#[repr(C)]
pub struct FfiResult {
    distances: *mut u64,
    predecessors: *mut usize,
    len: usize,
}

#[no_mangle]
pub extern "C" fn usssp_graph_new(vertices: usize) -> *mut FfiGraph {
    Box::into_raw(Box::new(FfiGraph {
        graph: UndirectedGraph::new(vertices),
    }))
}

/// Returns null when `edge_limit` cannot be met
#[no_mangle]
pub extern "C" fn usssp_graph_generate(vertices: usize, edge_limit: usize, seed: u64) -> *mut FfiGraph {
    match RandomGraphGenerator::new(seed).generate(vertices, edge_limit) {
        Ok(graph) => Box::into_raw(Box::new(FfiGraph { graph })),
        Err(_) => std::ptr::null_mut(),
    }
}

#[no_mangle]
pub extern "C" fn usssp_graph_add_edge(g: *mut FfiGraph, u: usize, v: usize, weight: u64) -> c_int {
    if g.is_null() {
        return USSSP_ERR;
    }
    match unsafe { &mut *g }.graph.add_edge(u, v, weight) {
        Ok(()) => USSSP_OK,
        Err(_) => USSSP_ERR,
    }
}

#[no_mangle]
pub extern "C" fn usssp_graph_assign_weights(g: *mut FfiGraph, seed: u64, min_weight: u64, max_weight: u64) -> c_int {
    if g.is_null() {
        return USSSP_ERR;
    }
    match RandomWeightAssigner::new(seed, min_weight, max_weight) {
        Ok(assigner) => {
            assigner.assign(&mut unsafe { &mut *g }.graph);
            USSSP_OK
        }
        Err(_) => USSSP_ERR,
    }
}

#[no_mangle]
pub extern "C" fn usssp_graph_free(g: *mut FfiGraph) {
    if !g.is_null() {
        unsafe {
            drop(Box::from_raw(g));
        }
    }
}

/// Returns null on a null graph or an out-of-range source
#[no_mangle]
pub extern "C" fn usssp_shortest_paths(g: *const FfiGraph, source: usize) -> *mut FfiResult {
    if g.is_null() {
        return std::ptr::null_mut();
    }
    let graph = unsafe { &(*g).graph };
    match Dijkstra::new().compute_shortest_paths(graph, source) {
        Ok(result) => {
            let len = result.distances.len();
            let dist_vec: Box<[u64]> = result
                .distances
                .into_iter()
                .map(|d| d.unwrap_or(u64::MAX))
                .collect();
            let pred_vec: Box<[usize]> = result
                .predecessors
                .into_iter()
                .map(|p| p.unwrap_or(usize::MAX))
                .collect();
            Box::into_raw(Box::new(FfiResult {
                distances: Box::into_raw(dist_vec) as *mut u64,
                predecessors: Box::into_raw(pred_vec) as *mut usize,
                len,
            }))
        }
        Err(_) => std::ptr::null_mut(),
    }
}

#[no_mangle]
pub extern "C" fn usssp_result_len(res: *const FfiResult) -> usize {
    if res.is_null() {
        0
    } else {
        unsafe { (*res).len }
    }
}

#[no_mangle]
pub extern "C" fn usssp_result_distances(res: *const FfiResult) -> *const u64 {
    if res.is_null() {
        std::ptr::null()
    } else {
        unsafe { (*res).distances }
    }
}

#[no_mangle]
pub extern "C" fn usssp_result_predecessors(res: *const FfiResult) -> *const usize {
    if res.is_null() {
        std::ptr::null()
    } else {
        unsafe { (*res).predecessors }
    }
}

#[no_mangle]
pub extern "C" fn usssp_result_free(res: *mut FfiResult) {
    if !res.is_null() {
        unsafe {
            let res = Box::from_raw(res);
            drop(Box::from_raw(std::ptr::slice_from_raw_parts_mut(res.distances, res.len)));
            drop(Box::from_raw(std::ptr::slice_from_raw_parts_mut(res.predecessors, res.len)));
        }
    }
}
