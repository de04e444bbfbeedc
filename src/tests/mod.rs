//! 单元测试模块
//! 覆盖渲染入口、页面外壳、QuickJS 与入口表
