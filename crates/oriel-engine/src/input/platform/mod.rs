mod sdl;

pub(crate) use sdl::translate_event;
