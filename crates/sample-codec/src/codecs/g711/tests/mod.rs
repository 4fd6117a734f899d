//! G.711 test suite
